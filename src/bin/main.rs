use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::info;
use netmirror::formats::{
    format_prefix_lists, parse_asn_list, AsnBlocks, PrefixListOptions, PrefixListStats, Vendor,
};
use netmirror::io::DEFAULT_FEED_URL;
use netmirror::sink::read_blocks;
use netmirror::{FileSink, RegistryParser};

/// netmirror regroups the NRO delegated statistics by allocation and writes per-ASN prefix files.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Opts {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Download the statistics feed and write `<asn>.json` and `<asn>.txt` for every ASN.
    Build {
        /// Feed location, local path or remote URL.
        #[clap(short, long, default_value = DEFAULT_FEED_URL)]
        source: String,

        /// Output directory, removed and recreated on every run.
        #[clap(short, long, default_value = "public/api/asn")]
        output_dir: PathBuf,
    },
    /// Print router prefix lists for ASNs from a directory written by `build`.
    PrefixList {
        /// Directory with `<asn>.json` files.
        #[clap(short, long, default_value = "public/api/asn")]
        data_dir: PathBuf,

        /// Output style: cisco, huawei, juniper, mikrotik, mikrotik_route, bird or plain.
        #[clap(short, long, default_value = "cisco")]
        vendor: Vendor,

        /// One list per ASN instead of a single merged list.
        #[clap(long)]
        no_merge: bool,

        /// Only IPv4 blocks.
        #[clap(short = '4', long)]
        ipv4_only: bool,

        /// Only IPv6 blocks.
        #[clap(short = '6', long)]
        ipv6_only: bool,

        /// AS numbers, separated by spaces or commas.
        #[clap(name = "ASN", required = true)]
        asns: Vec<String>,
    },
}

fn build(source: &str, output_dir: PathBuf) {
    let parser = match RegistryParser::new(source) {
        Ok(p) => p,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    };
    let index = match parser.into_group_index() {
        Ok(index) => index,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    };

    info!("writing per-ASN files to {}", output_dir.display());
    let summary = FileSink::recreate(&output_dir).and_then(|mut sink| index.emit(&mut sink));
    match summary {
        Ok(summary) => println!("processed {} ASNs", summary.emitted),
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    }
}

fn prefix_list(data_dir: PathBuf, asns: Vec<String>, options: PrefixListOptions) {
    let results = parse_asn_list(asns.join(" ").as_str())
        .into_iter()
        .map(|asn| match read_blocks(&data_dir, asn.as_str()) {
            Ok(blocks) => AsnBlocks::found(asn, blocks),
            Err(err) => {
                info!("no data for AS{}: {}", asn, err);
                AsnBlocks::missing(asn)
            }
        })
        .collect::<Vec<_>>();

    let stats = PrefixListStats::from_results(&results);
    info!(
        "{} ASNs found, {} missing, {} IPv4 and {} IPv6 blocks",
        stats.found, stats.missing, stats.ipv4, stats.ipv6
    );
    print!("{}", format_prefix_lists(&results, &options));
}

fn main() {
    let opts: Opts = Opts::parse();

    env_logger::init();

    match opts.command {
        Commands::Build { source, output_dir } => build(source.as_str(), output_dir),
        Commands::PrefixList {
            data_dir,
            vendor,
            no_merge,
            ipv4_only,
            ipv6_only,
            asns,
        } => {
            let (ipv4, ipv6) = match (ipv4_only, ipv6_only) {
                (true, true) => {
                    eprintln!("Error: --ipv4-only and --ipv6-only cannot be used together");
                    std::process::exit(1);
                }
                (true, false) => (true, false),
                (false, true) => (false, true),
                (false, false) => (true, true),
            };
            let options = PrefixListOptions {
                vendor,
                merge: !no_merge,
                ipv4,
                ipv6,
            };
            prefix_list(data_dir, asns, options);
        }
    }
}
