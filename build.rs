use std::env;
use std::path::PathBuf;

const REQUIRED_LANGUAGE_PACKS: [&str; 2] = ["kor.traineddata", "eng.traineddata"];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=tessdata/");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());
    let tessdata_dir = manifest_dir.join("tessdata");

    if !tessdata_dir.exists() {
        println!("cargo:warning=No tessdata directory found. Tesseract will use system data.");
        return;
    }

    for pack in REQUIRED_LANGUAGE_PACKS {
        if !tessdata_dir.join(pack).exists() {
            println!(
                "cargo:warning=tessdata/{} is missing, recognition for that script will rely on system data",
                pack
            );
        }
    }
}
