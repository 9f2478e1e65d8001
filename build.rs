fn main() {
    println!("cargo:rerun-if-env-changed=CARGO_CFG_TARGET_OS");
    forward_espidf_env();
}

#[cfg(feature = "espidf")]
fn forward_espidf_env() {
    // Host builds (tests, simulation) have no ESP-IDF environment to forward.
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("espidf") {
        embuild::espidf::sysenv::output();
    }
}

#[cfg(not(feature = "espidf"))]
fn forward_espidf_env() {}
