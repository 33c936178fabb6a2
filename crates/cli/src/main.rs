use std::{
    ffi::OsString,
    io::{self, Write},
    path::PathBuf,
};

use clap::{error::ErrorKind, Parser};
use icon_resizer::resize_icon_with;

/// Generate icon-16/32/48/128.png from a single master image.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// The image to resize, in any format the decoder understands
    #[clap(parse(from_os_str), allow_hyphen_values = true)]
    input_image: PathBuf,

    /// Directory receiving the icons, created if missing
    #[clap(parse(from_os_str), allow_hyphen_values = true)]
    output_dir: PathBuf,

    // Anything past the two paths is ignored
    #[clap(parse(from_os_str), allow_hyphen_values = true, hide = true)]
    _extra: Vec<PathBuf>,
}

const DEFAULT_PROGRAM: &str = "resize-icons";

fn main() {
    env_logger::init();

    let stdout = io::stdout();
    if let Err(e) = run(std::env::args_os(), &mut stdout.lock()) {
        log::error!("Failed to write to stdout: {}", e);
    }
}

/// Parse `argv` and resize. Every outcome is reported as text on `out`;
/// only a failure to write that text is returned.
fn run<I, T>(argv: I, out: &mut impl Write) -> io::Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
    let program = argv
        .first()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_PROGRAM.to_string());

    // program name plus both paths
    if argv.len() < 3 {
        return write_usage(out, &program);
    }

    let args = match Args::try_parse_from(&argv) {
        Ok(args) => args,
        Err(err) => {
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => write!(out, "{}", err),
                _ => write_usage(out, &program),
            };
        }
    };

    let mut notice = Ok(());
    let result = resize_icon_with(&args.input_image, &args.output_dir, |icon| {
        if notice.is_ok() {
            notice = writeln!(out, "Saved {}", icon.path.display());
        }
    });
    notice?;

    if let Err(e) = result {
        writeln!(out, "Error: {}", e)?;
    }
    Ok(())
}

fn write_usage(out: &mut impl Write, program: &str) -> io::Result<()> {
    writeln!(out, "Usage: {} <input_image> <output_dir>", program)
}
