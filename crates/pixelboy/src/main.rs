use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{bail, Context};
use pixelboy_gb::{GameBoy, SCREEN_HEIGHT, SCREEN_WIDTH};

const USAGE: &str = "Usage: pixelboy <rom_path> [--frames N] [--out PATH] [--trace] [--doctor]";
const DEFAULT_FRAMES: u32 = 60;

struct Options {
    rom_path: PathBuf,
    frames: u32,
    out_path: Option<PathBuf>,
    trace: bool,
    doctor: bool,
}

fn parse_args() -> anyhow::Result<Options> {
    let mut args = std::env::args().skip(1);
    let mut rom_path = None;
    let mut frames = DEFAULT_FRAMES;
    let mut out_path = None;
    let mut trace = false;
    let mut doctor = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--frames" => {
                let value = args.next().context("--frames needs a value")?;
                frames = value
                    .parse()
                    .with_context(|| format!("invalid frame count '{value}'"))?;
            }
            "--out" => {
                out_path = Some(args.next().map(PathBuf::from).context("--out needs a path")?);
            }
            "--trace" => trace = true,
            "--doctor" => doctor = true,
            "-h" | "--help" => {
                println!("{USAGE}");
                std::process::exit(0);
            }
            flag if flag.starts_with("--") => bail!("unknown option '{flag}'\n{USAGE}"),
            path => {
                if rom_path.replace(PathBuf::from(path)).is_some() {
                    bail!("more than one ROM path given\n{USAGE}");
                }
            }
        }
    }

    let Some(rom_path) = rom_path else {
        eprintln!("{USAGE}");
        std::process::exit(2);
    };

    Ok(Options {
        rom_path,
        frames,
        out_path,
        trace,
        doctor,
    })
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let options = parse_args()?;

    let rom = std::fs::read(&options.rom_path)
        .with_context(|| format!("failed to read ROM '{}'", options.rom_path.display()))?;
    let mut gb = GameBoy::from_rom(rom)
        .with_context(|| format!("failed to load cartridge '{}'", options.rom_path.display()))?;
    gb.set_doctor_mode(options.doctor);

    let stdout = std::io::stdout();
    let mut trace_out = BufWriter::new(stdout.lock());
    let mut trace_error = None;

    for frame in 0..options.frames {
        let result = if options.trace {
            gb.step_frame_with(|cpu, memory| {
                if trace_error.is_none() {
                    if let Err(err) = writeln!(trace_out, "{}", cpu.trace_line(memory)) {
                        trace_error = Some(err);
                    }
                }
            })
        } else {
            gb.step_frame()
        };

        if let Some(err) = trace_error.take() {
            return Err(err).context("failed to write trace");
        }
        result.with_context(|| format!("CPU stopped during frame {frame}"))?;
    }
    trace_out.flush().context("failed to write trace")?;

    log::info!("Ran {} frames ({} CPU cycles)", options.frames, gb.cpu.cycles);

    if let Some(out_path) = &options.out_path {
        let mut buffer = vec![0u8; SCREEN_WIDTH * SCREEN_HEIGHT * 3];
        gb.frame_rgb24(&mut buffer);
        std::fs::write(out_path, &buffer)
            .with_context(|| format!("failed to write '{}'", out_path.display()))?;
        println!(
            "Wrote {} bytes ({}x{} rgb24) after {} frames to '{}'",
            buffer.len(),
            SCREEN_WIDTH,
            SCREEN_HEIGHT,
            options.frames,
            out_path.display()
        );
    }

    Ok(())
}
