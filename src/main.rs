use sims_gba_text::{Language, MenuStage, RomTextReader};
use std::env;

fn usage() {
    println!(
        "sims-gba-text: extract in-game strings from The Sims GBA ROMs.\n\n\
         Usage: sims-gba-text -i <PathToROM> -id <hex string ID> [-l <language>]\n\
         \x20      sims-gba-text -i <PathToROM> --menu <hex menu ID>\n\n\
         Use -i or -input to provide the path to the ROM.\n\
         Use -id to provide the string ID in hexadecimal.\n\
         Use -l or -language to pick the language bank (western releases only).\n\
         Use --menu to print a Sims 2 menu's function addresses instead.\n\n\
         Valid languages:\n\
         english or e\ndutch or d\nfrench or f\ngerman or g\nitalian or i\nspanish or s"
    );
}

fn abort(msg: &str) -> ! {
    eprintln!("ERROR: {}", msg);
    std::process::exit(1);
}

fn hex_arg(args: &[String], idx: usize, flag: &str) -> u32 {
    let Some(raw) = args.get(idx) else {
        abort(&format!("No argument provided after '{}'.", flag));
    };
    match u32::from_str_radix(raw.trim_start_matches("0x"), 16) {
        Ok(v) => v,
        Err(_) => abort(&format!("'{}' is not a valid hexadecimal ID.", raw)),
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        usage();
        return;
    }

    let mut rom_path: Option<&str> = None;
    let mut language = Language::English;
    let mut string_id: Option<u32> = None;
    let mut menu_id: Option<u32> = None;

    let mut idx = 1;
    while idx < args.len() {
        match args[idx].as_str() {
            "-i" | "-input" => {
                match args.get(idx + 1) {
                    Some(path) => rom_path = Some(path.as_str()),
                    None => abort("No argument provided after '-i'."),
                }
                idx += 2;
            }
            "-l" | "-language" => {
                let Some(raw) = args.get(idx + 1) else {
                    abort("No argument provided after '-l'.");
                };
                match raw.parse() {
                    Ok(lang) => language = lang,
                    Err(_) => abort("No valid language has been provided with '-l'."),
                }
                idx += 2;
            }
            "-id" => {
                string_id = Some(hex_arg(&args, idx + 1, "-id"));
                idx += 2;
            }
            "--menu" => {
                menu_id = Some(hex_arg(&args, idx + 1, "--menu"));
                idx += 2;
            }
            other => abort(&format!("Not a valid parameter: '{}'.", other)),
        }
    }

    let Some(rom_path) = rom_path else {
        abort("No ROM path provided (use -i).");
    };

    let reader = match RomTextReader::new(rom_path) {
        Ok(reader) => reader,
        Err(e) => abort(&e.to_string()),
    };

    if let Some(menu_id) = menu_id {
        for (label, stage) in [("Prepare", MenuStage::Prepare), ("Logic", MenuStage::Logic)] {
            match reader.menu_address(menu_id, stage) {
                Ok(Some(addr)) => println!("{}: {:#010X}", label, addr),
                Ok(None) => println!("{}: (empty slot)", label),
                Err(e) => abort(&e.to_string()),
            }
        }
        return;
    }

    let Some(string_id) = string_id else {
        abort("No string ID provided (use -id).");
    };
    if string_id > u32::from(reader.max_string_id()) {
        abort("The string ID is too high for this game.");
    }
    let string_id = string_id as u16;

    if reader.game().raw_only() {
        // The Japanese releases decode to non-Latin codes; print them as hex.
        match reader.fetch_raw(string_id) {
            Ok(bytes) => {
                let hex: Vec<String> = bytes.iter().map(|b| format!("{:02X}", b)).collect();
                println!("Your wanted string is:\n{}", hex.join(", "));
            }
            Err(e) => abort(&e.to_string()),
        }
    } else {
        match reader.fetch_text(string_id, language) {
            Ok(text) => println!("Your wanted string is:\n{}", text),
            Err(e) => abort(&e.to_string()),
        }
    }
}
