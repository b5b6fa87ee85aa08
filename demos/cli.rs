//! Command-line interface for cvd_assist
//!
//! Applies simulation or daltonized correction to an image file and names
//! the color at a chosen pixel. Exercises the same API a live capture layer
//! would use, one frame at a time.

use cvd_assist::{correct, simulate, spoken_phrase, AssistConfig, Frame, Variant};
use std::{env, path::Path, process};

fn main() {
    pretty_env_logger::init();

    let args: Vec<String> = env::args().collect();

    let mut variant = Variant::Protanopia;
    let mut mode = "simulate".to_string();
    let mut strength = None;
    let mut tolerance = None;
    let mut pick = None;
    let mut output = None;
    let mut image_path_arg = None;

    // Parse arguments
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--variant" => {
                i += 1;
                variant = match args.get(i).map(String::as_str) {
                    Some("protanopia") => Variant::Protanopia,
                    Some("deuteranopia") => Variant::Deuteranopia,
                    Some("tritanopia") => Variant::Tritanopia,
                    other => {
                        eprintln!("Unknown variant: {:?}", other.unwrap_or("<missing>"));
                        process::exit(1);
                    }
                };
            }
            "--mode" => {
                i += 1;
                match args.get(i).map(String::as_str) {
                    Some(m @ ("simulate" | "correct")) => mode = m.to_string(),
                    other => {
                        eprintln!("Unknown mode: {:?}", other.unwrap_or("<missing>"));
                        process::exit(1);
                    }
                }
            }
            "--strength" => {
                i += 1;
                strength = args.get(i).and_then(|s| s.parse::<f32>().ok());
            }
            "--tolerance" => {
                i += 1;
                tolerance = args.get(i).and_then(|s| s.parse::<f32>().ok());
            }
            "--pick" => {
                i += 1;
                pick = args.get(i).and_then(|s| {
                    let (x, y) = s.split_once(',')?;
                    Some((x.parse::<u32>().ok()?, y.parse::<u32>().ok()?))
                });
                if pick.is_none() {
                    eprintln!("--pick expects X,Y coordinates");
                    process::exit(1);
                }
            }
            "--output" | "-o" => {
                i += 1;
                output = args.get(i).cloned();
            }
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            arg if !arg.starts_with("--") => {
                if image_path_arg.is_none() {
                    image_path_arg = Some(arg.to_string());
                } else {
                    eprintln!("Error: Multiple image paths provided");
                    process::exit(1);
                }
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                eprintln!("Use --help for usage information");
                process::exit(1);
            }
        }
        i += 1;
    }

    let image_path_str = match image_path_arg {
        Some(path) => path,
        None => {
            print_help(&args[0]);
            process::exit(1);
        }
    };

    let image_path = Path::new(&image_path_str);
    if !image_path.exists() {
        eprintln!("Error: File '{}' does not exist", image_path.display());
        process::exit(1);
    }

    let config = AssistConfig {
        variant,
        strength: strength.unwrap_or_else(|| AssistConfig::default().strength),
        tolerance: tolerance.unwrap_or_else(|| AssistConfig::default().tolerance),
        ..AssistConfig::default()
    };
    if let Err(error) = config.validate() {
        eprintln!("Invalid settings: {}", error);
        eprintln!("Suggestion: {}", error.user_message());
        process::exit(1);
    }

    let image = match image::open(image_path) {
        Ok(image) => image.to_rgb8(),
        Err(error) => {
            eprintln!("Failed to load image: {}", error);
            process::exit(1);
        }
    };
    let frame = Frame::from_image(&image);

    let transformed = match mode.as_str() {
        "correct" => correct(&frame, config.variant, config.strength),
        _ => simulate(&frame, config.variant),
    };

    if let Some(path) = output {
        if let Err(error) = transformed.to_image().save(&path) {
            eprintln!("Failed to save output: {}", error);
            process::exit(1);
        }
        println!("Wrote {} ({} view, {})", path, mode, config.variant);
    }

    // Name the picked pixel (default: frame center), as the click-to-name
    // UI path would
    let (x, y) = pick.unwrap_or((frame.width() / 2, frame.height() / 2));
    match frame.pixel(x, y) {
        Some(pixel) => {
            let name = config
                .namer()
                .map(|namer| namer.name_color(pixel, config.tolerance))
                .unwrap_or_else(|error| {
                    eprintln!("Namer setup failed: {}", error);
                    process::exit(1);
                });
            println!(
                "Pixel ({}, {}) = rgb({}, {}, {}): {}",
                x, y, pixel[0], pixel[1], pixel[2], name
            );
            println!("{}", spoken_phrase(&name));
        }
        None => {
            eprintln!(
                "Pixel ({}, {}) is outside the {}x{} frame",
                x,
                y,
                frame.width(),
                frame.height()
            );
            process::exit(1);
        }
    }
}

fn print_help(program_name: &str) {
    eprintln!("Usage: {} [OPTIONS] <image_path>", program_name);
    eprintln!();
    eprintln!("Simulate or correct color vision deficiency on an image and name a pixel.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --variant TYPE    protanopia | deuteranopia | tritanopia (default: protanopia)");
    eprintln!("  --mode MODE       simulate | correct (default: simulate)");
    eprintln!("  --strength N      daltonization strength (default: 0.7)");
    eprintln!("  --tolerance N     dictionary match tolerance (default: 50)");
    eprintln!("  --pick X,Y        pixel to name (default: frame center)");
    eprintln!("  --output, -o FILE save the transformed image");
    eprintln!("  --help, -h        Show this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} photo.jpg", program_name);
    eprintln!("  {} --variant tritanopia --mode correct -o fixed.png photo.jpg", program_name);
    eprintln!("  {} --pick 120,80 --tolerance 30 photo.jpg", program_name);
}
