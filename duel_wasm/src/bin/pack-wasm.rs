//! Builds the browser bundle into `dist/` for `duel_server` to serve

use std::{
    io::{self, Write},
    process::{exit, Command, Output},
};

const WASM_LIB: &str = "duel_wasm";
const WASM_TARGET: &str = "wasm32-unknown-unknown";
const OUTPUT_DIR: &str = "dist";

fn main() {
    let wasm_path = format!("target/{}/release/{}.wasm", WASM_TARGET, WASM_LIB);

    println!("\n📦 Packaging [[ {} ]] into '{}'\n", WASM_LIB, OUTPUT_DIR);

    let mut build = Command::new("cargo");
    build
        .args(["build", "-p", WASM_LIB, "--lib"])
        .args(["--target", WASM_TARGET])
        .arg("--release");

    let mut bindgen = Command::new("wasm-bindgen");
    bindgen
        .arg(&wasm_path)
        .args(["--out-dir", OUTPUT_DIR])
        .args(["--target", "web"])
        .arg("--no-typescript");

    let mut page = Command::new("cp");
    page.arg(format!("{}/index.html", WASM_LIB))
        .arg(format!("{}/", OUTPUT_DIR));

    for command in [&mut build, &mut bindgen, &mut page] {
        run_step(command);
    }

    println!("\n⚡ Bundle ready in './{}'\n", OUTPUT_DIR);
}

fn run_step(command: &mut Command) {
    println!("EXECUTING :: ( {:?} )", command);
    let output = match command.output() {
        Ok(output) => output,
        Err(e) => {
            eprintln!("FAILURE ✖ could not launch :: {}", e);
            exit(1);
        }
    };

    if output.status.success() {
        println!("SUCCESS ✔");
    } else {
        println!("FAILURE ✖");
        write_all_feedback(&output);
        exit(1);
    }
}

fn write_all_feedback(output: &Output) {
    let _ = io::stdout().write_all(&output.stdout);
    let _ = io::stderr().write_all(&output.stderr);
}
