//! Headless 65x64 runner.
//!
//! Loads a flat ROM image, resets the CPU from the vector at the top of the
//! image (or forces PC), and steps until the program executes WDM 0xFF or
//! the step budget runs out. WDM console I/O goes to the process's standard
//! streams.

use std::path::PathBuf;
use std::process;

use emu_65x64::{Machine, MachineConfig};

struct CliArgs {
    rom_path: Option<PathBuf>,
    ram_size: usize,
    mem_mask: u64,
    pc: Option<u64>,
    trace: bool,
    max_steps: u64,
}

fn usage() {
    eprintln!("Usage: emu-65x64 --rom <image> [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --rom <image>       Flat ROM image, mapped from the top of RAM");
    eprintln!("  --ram-size <hex>    Size of the RAM region (default E000)");
    eprintln!("  --mem-mask <hex>    Address mask (default FFFF)");
    eprintln!("  --pc <hex>          Start at this address instead of the reset vector");
    eprintln!("  --trace             Print one trace line per instruction");
    eprintln!("  --max-steps <n>     Step budget (default 100000000)");
}

fn parse_hex(text: &str) -> Option<u64> {
    let trimmed = text.trim_start_matches("0x").trim_start_matches("0X");
    u64::from_str_radix(trimmed, 16).ok()
}

fn parse_args() -> Result<CliArgs, String> {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        rom_path: None,
        ram_size: 0xE000,
        mem_mask: 0xFFFF,
        pc: None,
        trace: false,
        max_steps: 100_000_000,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--rom" => {
                i += 1;
                cli.rom_path = args.get(i).map(PathBuf::from);
            }
            "--ram-size" => {
                i += 1;
                let value = args.get(i).and_then(|s| parse_hex(s));
                cli.ram_size =
                    value.ok_or("--ram-size needs a hex value")? as usize;
            }
            "--mem-mask" => {
                i += 1;
                let value = args.get(i).and_then(|s| parse_hex(s));
                cli.mem_mask = value.ok_or("--mem-mask needs a hex value")?;
            }
            "--pc" => {
                i += 1;
                let value = args.get(i).and_then(|s| parse_hex(s));
                cli.pc = Some(value.ok_or("--pc needs a hex value")?);
            }
            "--trace" => {
                cli.trace = true;
            }
            "--max-steps" => {
                i += 1;
                let value = args.get(i).and_then(|s| s.parse().ok());
                cli.max_steps = value.ok_or("--max-steps needs a number")?;
            }
            "--help" | "-h" => {
                usage();
                process::exit(0);
            }
            other => {
                return Err(format!("unknown option: {other}"));
            }
        }
        i += 1;
    }

    Ok(cli)
}

fn main() {
    let cli = match parse_args() {
        Ok(cli) => cli,
        Err(message) => {
            eprintln!("emu-65x64: {message}");
            usage();
            process::exit(1);
        }
    };

    let Some(rom_path) = cli.rom_path else {
        eprintln!("emu-65x64: no ROM image given");
        usage();
        process::exit(1);
    };

    let rom = match std::fs::read(&rom_path) {
        Ok(rom) => rom,
        Err(error) => {
            eprintln!("emu-65x64: cannot read {}: {error}", rom_path.display());
            process::exit(1);
        }
    };

    let mut machine = Machine::new(MachineConfig {
        mem_mask: cli.mem_mask,
        ram_size: cli.ram_size,
        rom,
        trace: cli.trace,
    });

    machine.reset();
    if let Some(pc) = cli.pc {
        machine.cpu_mut().set_pc(pc);
    }

    let steps = machine.run(cli.max_steps);
    if !machine.is_stopped() {
        eprintln!("emu-65x64: step budget exhausted after {steps} steps");
    }
    eprintln!("emu-65x64: {} cycles", machine.cycles());
}
