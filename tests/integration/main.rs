//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises one role or failure path
//! through [`NodeService`](homenode::app::service::NodeService) against the
//! recording mock board.  All tests run on the host with no real hardware
//! required.

mod fault_tests;
mod mock_hw;
mod role_tests;
