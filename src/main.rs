use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use chp_conv::converter::{Converter, DEFAULT_RADIUS};
use chp_conv::messages::Locale;

#[derive(Parser, Debug)]
#[command(name = "chp-conv")]
#[command(version, about = "Convert delimited geopoint files to the CHP mapping format")]
struct Args {
    /// Input file: a header row naming Name, Latitude and Longitude,
    /// then one point per row
    input: PathBuf,

    /// Output CHP file (created if absent, overwritten if present)
    output: PathBuf,

    /// Field delimiter used in the input file
    #[arg(short, long, default_value_t = ';')]
    delimiter: char,

    /// Radius label substituted into each PExt line
    #[arg(short, long, default_value_t = DEFAULT_RADIUS)]
    radius: u32,

    /// Language of status and error messages
    #[arg(short, long, value_enum, default_value = "en")]
    locale: LocaleArg,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum LocaleArg {
    En,
    Ru,
}

impl From<LocaleArg> for Locale {
    fn from(arg: LocaleArg) -> Self {
        match arg {
            LocaleArg::En => Locale::En,
            LocaleArg::Ru => Locale::Ru,
        }
    }
}

fn main() -> miette::Result<()> {
    let args = Args::parse();
    let messages = Locale::from(args.locale).table();

    if !args.delimiter.is_ascii() {
        return Err(miette::miette!(
            "Delimiter must be a single ASCII character, got '{}'",
            args.delimiter
        ));
    }

    let converter = Converter::new()
        .delimiter(args.delimiter as u8)
        .radius(args.radius);

    match converter.convert_file(&args.input, &args.output) {
        Ok(count) => {
            println!("{}", messages.success(count));
            Ok(())
        }
        Err(err) => Err(miette::miette!("{}", messages.describe(&err))),
    }
}
