//! Build script for polar-clock-simulator.
//!
//! On Windows the SDL2 import library and DLL are expected in `vendor/sdl2`
//! next to the workspace root. Other platforms link the system SDL2.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

fn main() {
    if env::var("CARGO_CFG_TARGET_OS").as_deref() != Ok("windows") {
        return;
    }

    let Some(sdl2_dir) = env::var_os("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .and_then(|dir| dir.parent().map(|root| root.join("vendor").join("sdl2")))
    else {
        return;
    };
    println!("cargo:rerun-if-changed={}", sdl2_dir.display());

    if !sdl2_dir.is_dir() {
        println!("cargo:warning=SDL2 not found in {}, falling back to system search path", sdl2_dir.display());
        return;
    }
    println!("cargo:rustc-link-search=native={}", sdl2_dir.display());

    if let Some(profile_dir) = env::var_os("OUT_DIR").as_deref().map(Path::new).and_then(profile_dir) {
        copy_dll(&sdl2_dir.join("SDL2.dll"), &profile_dir.join("SDL2.dll"));
    }
}

/// `target/<profile>` directory above `OUT_DIR`, where the binary lands.
fn profile_dir(out_dir: &Path) -> Option<PathBuf> {
    out_dir
        .ancestors()
        .find(|p| p.file_name().is_some_and(|n| n == "debug" || n == "release"))
        .map(Path::to_path_buf)
}

fn copy_dll(
    src: &Path,
    dst: &Path,
) {
    if !src.exists() || dst.exists() {
        return;
    }
    if let Err(e) = fs::copy(src, dst) {
        println!("cargo:warning=Failed to copy {}: {e}", src.display());
    }
}
