use std::path::PathBuf;

use anyhow::bail;
use anyhow::Context;
use clap::Parser;
use clap_num::maybe_hex;
use nes6502::decode_insn;
use nes6502::get_opcode_string;
use nes6502::Cpu;
use nes6502::Ram;
use nes6502::RunExit;
use nes6502::MAX_MEMORY_SIZE;
use nes6502::RESET_VECTOR;

/// Runs a raw 6502 image until it traps in a self-loop or jams.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Raw binary image
    image: PathBuf,

    /// Where the image is loaded
    #[arg(short, long, default_value_t = 0, value_parser = maybe_hex::<u16>)]
    load_address: u16,

    /// Initial program counter, read from the reset vector if not given
    #[arg(short, long, value_parser = maybe_hex::<u16>)]
    start: Option<u16>,

    /// Make everything from this address up read-only
    #[arg(short, long, value_parser = maybe_hex::<u16>)]
    rom_start: Option<u16>,

    /// Give up after this many instructions
    #[arg(short, long, default_value_t = 100_000_000)]
    max_steps: u64,

    /// Log every instruction
    #[arg(short, long)]
    trace: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut builder = env_logger::Builder::from_default_env();
    if args.trace {
        builder.filter_module("nes6502", log::LevelFilter::Trace);
    }
    builder.init();

    let image = std::fs::read(&args.image)
        .with_context(|| format!("reading {}", args.image.display()))?;
    if args.load_address as usize + image.len() > MAX_MEMORY_SIZE {
        bail!(
            "{} bytes at {:#06x} do not fit into 64 KiB",
            image.len(),
            args.load_address
        );
    }

    let mut memory = match args.rom_start {
        Some(rom_start) => Ram::with_rom_start(rom_start),
        None => Ram::new(),
    };
    memory.load(args.load_address, &image);

    let start = args
        .start
        .unwrap_or_else(|| memory.read_u16(RESET_VECTOR));
    log::info!(
        "loaded {} bytes at {:#06x}, starting at {start:#06x}",
        image.len(),
        args.load_address
    );

    let mut cpu = Cpu::new();
    cpu.reset_to(start);

    let exit = cpu
        .run(&mut memory, args.max_steps)
        .context("CPU jammed")?;
    match exit {
        RunExit::Trapped { pc, steps } => {
            let cells = memory.cells();
            let opcode = cells[pc as usize];
            let size = decode_insn(opcode).map_or(1, |insn| insn.size());
            let bytes = (0..size)
                .map(|i| format!("{:02X}", cells[pc.wrapping_add(i) as usize]))
                .collect::<Vec<_>>()
                .join(" ");
            println!(
                "trapped at {pc:#06x} on {} [{bytes}] after {steps} instructions",
                get_opcode_string(opcode)
            );
        }
        RunExit::StepLimit(steps) => println!("stopped after {steps} instructions"),
    }
    println!("{:?}", cpu.registers());

    Ok(())
}
