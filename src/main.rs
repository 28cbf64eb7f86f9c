use srtread::SubtitleReader;

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::info;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(()) => (),
        Err(err) => {
            eprintln!("An error occurred: {}", err);
            for cause in err.chain().skip(1) {
                eprintln!("    {}", cause);
            }
            std::process::exit(1);
        }
    }
}

#[derive(ClapParser)]
#[command(about = "Print the subtitles in an SRT file")]
struct Cli {
    #[arg(
        value_name = "FILE",
        help = "The file to read from. If not supplied, the subtitles will be read from standard input.",
        default_value = "-"
    )]
    input: String,
    #[arg(
        short,
        long,
        help = "Only print the number of subtitles in the input."
    )]
    count: bool,
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut dst = BufWriter::new(stdout.lock());

    let total = if cli.input == "-" {
        let stdin = io::stdin();
        let reader = SubtitleReader::new(stdin.lock());
        print_subtitles(reader, &mut dst, cli.count).context("Failed to read from stdin")?
    } else {
        let file = File::open(&cli.input)
            .context(format!("Failed to open input file: '{}'", cli.input))?;
        let reader = SubtitleReader::new(BufReader::new(file));
        print_subtitles(reader, &mut dst, cli.count)
            .context(format!("Failed to parse SRT file: '{}'", cli.input))?
    };

    if cli.count {
        writeln!(dst, "{}", total)?;
    }
    dst.flush().context("Failed to write to stdout")?;

    info!("read {} subtitles from '{}'", total, cli.input);
    Ok(())
}

fn print_subtitles<R: BufRead, W: Write>(
    mut reader: SubtitleReader<R>,
    dst: &mut W,
    count_only: bool,
) -> Result<usize> {
    let mut total = 0;
    while let Some(sub) = reader.read_subtitle()? {
        total += 1;
        if count_only {
            continue;
        }
        writeln!(dst, "{}", sub.number())?;
        writeln!(dst, "{:?} --> {:?}", sub.start(), sub.end())?;
        writeln!(dst, "{}", sub.text())?;
        writeln!(dst, "---------------------")?;
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const INPUT: &str = "1\n00:00:01,000 --> 00:00:02,000\nHello\n\n2\n00:00:03,000 --> 00:00:04,500\nWorld\nacross\n";

    #[test]
    fn prints_every_subtitle() {
        let mut buf = Cursor::new(vec![]);

        let total = print_subtitles(SubtitleReader::new(INPUT.as_bytes()), &mut buf, false)
            .expect("Failed to print subtitles");

        assert_eq!(total, 2);
        assert_eq!(
            String::from_utf8(buf.into_inner()).unwrap(),
            "1\n1s --> 2s\nHello\n---------------------\n\
             2\n3s --> 4.5s\nWorld\nacross\n---------------------\n"
        );
    }

    #[test]
    fn count_only_prints_nothing() {
        let mut buf = Cursor::new(vec![]);

        let total = print_subtitles(SubtitleReader::new(INPUT.as_bytes()), &mut buf, true)
            .expect("Failed to count subtitles");

        assert_eq!(total, 2);
        assert!(buf.into_inner().is_empty());
    }

    #[test]
    fn parse_errors_are_reported() {
        let mut buf = Cursor::new(vec![]);

        let err = print_subtitles(SubtitleReader::new("abc\n".as_bytes()), &mut buf, false)
            .unwrap_err();

        assert_eq!(err.to_string(), "srt: expected a sequence number at \"abc\"");
    }
}
