// Keytrace CLI
// Captures keystrokes from an evdev keyboard into a plain-text transcript

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{debug, info};

use keytrace_core::{list_keyboards, CancelToken, DeviceReader, Transcriber};

/// Keystroke transcriber for Linux evdev keyboards
#[derive(Parser, Debug)]
#[command(name = "keytrace")]
#[command(version)]
#[command(about = "Keystroke transcriber for Linux evdev keyboards", long_about = None)]
struct Args {
    /// Transcript output file
    #[arg(short = 'f', long, value_name = "FILE")]
    outfile: Option<PathBuf>,

    /// Keyboard event device (e.g. /dev/input/event3)
    #[arg(short = 'k', long, value_name = "DEVICE")]
    keyboard: Option<PathBuf>,

    /// List available keyboard devices and exit
    #[arg(long)]
    list_devices: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn print_devices() -> Result<()> {
    let devices = list_keyboards().context("Error finding keyboard devices")?;
    println!("Found {} keyboard device(s):", devices.len());
    for device in &devices {
        match &device.path {
            Some(path) => println!("  {}: {} ({})", device.index, device.name, path),
            None => println!("  {}: {}", device.index, device.name),
        }
    }
    Ok(())
}

/// Spawn a thread that turns SIGINT/SIGTERM into a cancellation request.
fn install_signal_handler(cancel: CancelToken) -> Result<()> {
    use signal_hook::consts::{SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;

    let mut signals = Signals::new([SIGINT, SIGTERM]).context("could not register signals")?;
    std::thread::spawn(move || {
        for signal in &mut signals {
            match signal {
                SIGINT | SIGTERM => {
                    info!("received signal, shutting down");
                    cancel.cancel();
                    break;
                }
                _ => {}
            }
        }
    });
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    // Listing devices needs neither outfile nor keyboard.
    if args.list_devices {
        return print_devices();
    }

    let Some(outfile) = args.outfile else {
        bail!("Outfile is a required argument");
    };
    let Some(keyboard) = args.keyboard else {
        bail!("Keyboard is a required argument");
    };

    let cancel = CancelToken::new();
    install_signal_handler(cancel.clone())?;

    let mut reader = DeviceReader::open(&keyboard, cancel.clone())
        .with_context(|| format!("Could not open keyboard device {}", keyboard.display()))?;
    debug!("reading from {}", reader.device_name());

    let file = File::create(&outfile)
        .with_context(|| format!("Could not open output file {}", outfile.display()))?;
    let sink = BufWriter::new(file);

    info!("keytrace is running. Press Ctrl+C to stop.");
    let mut transcriber = Transcriber::new(sink, cancel);
    let stats = transcriber.run(&mut reader)?;

    info!(
        "captured {} events, translated {} keys, {} flushes",
        stats.events_seen, stats.keys_translated, stats.flushes
    );
    Ok(())
}
