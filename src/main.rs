use id3_reader::scan_path;
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <path-to-audio-file> [--frames]", args[0]);
        std::process::exit(1);
    }

    let path = &args[1];
    let dump_frames = args.iter().skip(2).any(|arg| arg == "--frames");

    println!("Reading audio file: {}", path);
    println!("{}", "=".repeat(60));

    match scan_path(path) {
        Ok(Some(tag)) => {
            println!("\nTag Header:");
            println!(
                "  Version: ID3v2.{}.{}",
                tag.header.major_version, tag.header.minor_version
            );
            println!("  Found at offset: {}", tag.header.start);
            println!("  Body size: {} bytes", tag.header.size);
            println!("  Frames start at: {}", tag.header.frames_start);
            println!("  Unsynchronization: {}", tag.header.flags.unsynchronization);
            println!("  Extended header: {}", tag.header.flags.extended_header);
            println!("  Footer: {}", tag.header.flags.footer);

            let info = tag.info();
            println!("\nTrack Information:");
            println!("  Title:  {}", info.title.as_deref().unwrap_or("-"));
            println!("  Artist: {}", info.artist.as_deref().unwrap_or("-"));
            println!("  Album:  {}", info.album.as_deref().unwrap_or("-"));
            println!("  Length: {}", info.length.as_deref().unwrap_or("-"));
            println!("  Year:   {}", info.year.as_deref().unwrap_or("-"));

            println!("\nFrames: {}", tag.frames.len());
            if dump_frames {
                for (i, frame) in tag.frames.iter().enumerate() {
                    println!(
                        "  {}. {} ({} bytes, flags {:02x}{:02x})",
                        i + 1,
                        String::from_utf8_lossy(&frame.id),
                        frame.size,
                        frame.flags[0],
                        frame.flags[1]
                    );
                }
            }
        }
        Ok(None) => {
            println!("\nNo ID3v2 tag found.");
        }
        Err(e) => {
            eprintln!("\nERROR: Failed to read ID3 tag");
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    }
}
