use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Copy the launch records CSV to OUT_DIR for include_str. A missing
    // fixture embeds an empty file, which the app reports as a load error.
    let launches_src = Path::new("../fixtures/spacex_launch_dash.csv");
    let launches_dest = Path::new(&out_dir).join("spacex_launch_dash.csv");
    if launches_src.exists() {
        fs::copy(launches_src, launches_dest).unwrap();
    } else {
        println!("cargo:warning=fixtures/spacex_launch_dash.csv not found; embedding an empty dataset");
        fs::write(launches_dest, "").unwrap();
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../fixtures/spacex_launch_dash.csv");
}
