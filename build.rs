fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=BUILD_ID");

    // Release pipelines stamp the binary via BUILD_ID; local builds report
    // "unknown", matching the /health payload contract.
    let build_id = std::env::var("BUILD_ID").unwrap_or_else(|_| "unknown".to_string());
    println!("cargo:rustc-env=UI_SERVER_BUILD_ID={build_id}");
}
