//! Load TCX files, dump them again and show the differences to the input.
//!
//! `cargo run --example dump_and_diff -- activity.tcx [...]`

use std::{
	env,
	process::{
		self,
		Command,
	},
};

fn main() {
	env_logger::init();

	let files: Vec<String> = env::args().skip(1).collect();
	if files.is_empty() {
		eprintln!("usage: dump_and_diff FILE...");
		process::exit(2);
	}

	let dir = match tempfile::tempdir() {
		Ok(dir) => dir,
		Err(e) => {
			eprintln!("can't create temporary directory: {}", e);
			process::exit(1);
		},
	};

	let mut failed = false;
	for (index, file) in files.iter().enumerate() {
		let doc = match tcx::load_file(file) {
			Ok(doc) => doc,
			Err(e) => {
				eprintln!("{}: {}", file, e);
				failed = true;
				continue;
			},
		};
		for diagnostic in &doc.diagnostics {
			println!("{}: {}", file, diagnostic);
		}

		let output = dir.path().join(format!("{}.tcx", index));
		if let Err(e) = doc.dump(&output) {
			eprintln!("{}: dump failed: {}", file, e);
			failed = true;
			continue;
		}

		match tcx::load_file(&output) {
			Ok(again) if again.root == doc.root => (),
			Ok(_) => println!("{}: typed trees differ after dump", file),
			Err(e) => {
				eprintln!("{}: can't read dump back: {}", file, e);
				failed = true;
			},
		}

		match Command::new("diff").arg("-u").arg(file).arg(&output).status() {
			Ok(status) if status.success() => println!("{}: identical", file),
			Ok(_) => (),
			Err(e) => eprintln!("can't run diff: {}", e),
		}
	}

	if failed {
		process::exit(1);
	}
}
