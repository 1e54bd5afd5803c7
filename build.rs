fn main() {
    // Footer copyright year is derived from this stamp
    let build_time = chrono::Utc::now().to_rfc3339();
    println!("cargo:rustc-env=BUILD_TIME={build_time}");

    println!("cargo:rerun-if-changed=build.rs");
    // Project write-ups are embedded at compile time
    println!("cargo:rerun-if-changed=content/projects");
}
