//! Command-line front end for shapecraft.
//!
//! ```text
//! shapecraft "Draw a circle with a radius of 100"             # prints a data: URI
//! shapecraft "Draw a circle with a radius of 100" circle.png  # writes the PNG
//! shapecraft --shapes                                         # lists every template
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use miette::{IntoDiagnostic, WrapErr};
use shapecraft::Engine;

fn main() -> ExitCode {
    // Logs go to stderr so stdout stays clean for the image
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{:?}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> miette::Result<ExitCode> {
    let mut args = std::env::args().skip(1);
    let Some(criteria) = args.next() else {
        eprintln!("usage: shapecraft <criteria> [output.png]");
        eprintln!("       shapecraft --shapes");
        return Ok(ExitCode::FAILURE);
    };

    if criteria == "--shapes" {
        for shape in shapecraft::catalog() {
            println!("{:<22}{}", shape.name(), shape.template());
        }
        return Ok(ExitCode::SUCCESS);
    }

    let output = args.next().map(PathBuf::from);
    let result = Engine::new().process(&criteria);

    let Some(image) = result.image else {
        eprintln!("{}", result.message);
        return Ok(ExitCode::FAILURE);
    };

    match output {
        Some(path) => {
            std::fs::write(&path, &image.bytes)
                .into_diagnostic()
                .wrap_err_with(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = image.bytes.len(), "image written");
        }
        None => println!("{}", image.data_uri()),
    }

    Ok(ExitCode::SUCCESS)
}
