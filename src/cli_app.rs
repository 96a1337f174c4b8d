use crate::art::ArtConfig;
use clap::{command, value_parser, Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;

pub fn create() -> Command {
    command!()
        .arg(Arg::new("collection")
            .value_name("NAME")
            .short('g')
            .long("gallery")
            .required(true)
            .help("Name of the collection. Images land in a subdirectory of this name and are named '{collection}_image_{i}.png'.")
        )
        .arg(Arg::new("count")
            .value_name("INTEGER")
            .short('n')
            .long("count")
            .default_value("1")
            .value_parser(value_parser!(u32).range(1..))
            .help("Number of images to generate.")
        )
        .arg(Arg::new("size")
            .value_name("PIXELS")
            .short('s')
            .long("size")
            .default_value("256")
            .value_parser(value_parser!(u32))
            .help("Edge length of each output image in pixels.")
        )
        .arg(Arg::new("lines")
            .value_name("INTEGER")
            .short('l')
            .long("lines")
            .default_value("10")
            .value_parser(value_parser!(u32))
            .help("Number of lines per image. Must be at least 2.")
        )
        .arg(Arg::new("rescale_factor")
            .value_name("INTEGER")
            .long("rescale-factor")
            .default_value("2")
            .value_parser(value_parser!(u32))
            .help("Supersampling factor. Images render at size * factor and are downsampled once at the end, which is what anti-aliases the strokes.")
        )
        .arg(Arg::new("seed")
            .value_name("INTEGER")
            .long("seed")
            .value_parser(value_parser!(u64))
            .help("Seed for reproducible output. Each image of a batch derives its own stream from this plus its index.")
        )
        .arg(Arg::new("gallery_root")
            .value_name("DIRECTORY")
            .short('o')
            .long("gallery-root")
            .default_value("art_gallery")
            .help("Directory holding all collections. Created if absent.")
        )
        .arg(Arg::new("verbose")
            .short('v')
            .long("verbose")
            .action(ArgAction::Count)
            .help("Output progress messages. Pass multiple times for more verbose logging.")
        )
}

fn string_arg(matches: &ArgMatches, name: &str) -> String {
    matches
        .get_one::<String>(name)
        .expect("Required or default value")
        .clone()
}

fn number_arg<T: Clone + Send + Sync + 'static>(matches: &ArgMatches, name: &str) -> T {
    matches.get_one::<T>(name).expect("There is a default").clone()
}

pub fn parse_args() -> ArtConfig {
    config_from(create().get_matches())
}

fn config_from(matches: ArgMatches) -> ArtConfig {
    let config = ArtConfig {
        collection: string_arg(&matches, "collection"),
        count: number_arg(&matches, "count"),
        size_px: number_arg(&matches, "size"),
        line_count: number_arg(&matches, "lines"),
        rescale_factor: number_arg(&matches, "rescale_factor"),
        seed: matches.get_one::<u64>("seed").copied(),
        gallery_root: PathBuf::from(string_arg(&matches, "gallery_root")),
        verbosity: matches.get_count("verbose"),
    };

    if config.verbosity > 1 {
        println!("Running with arguments: {:?}", config);
    }

    config
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_command_is_well_formed() {
        create().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let matches = create()
            .try_get_matches_from(["polyart", "-g", "doodles"])
            .unwrap();
        let config = config_from(matches);
        assert_eq!("doodles", config.collection);
        assert_eq!(1, config.count);
        assert_eq!(256, config.size_px);
        assert_eq!(10, config.line_count);
        assert_eq!(2, config.rescale_factor);
        assert_eq!(None, config.seed);
        assert_eq!(PathBuf::from("art_gallery"), config.gallery_root);
        assert_eq!(0, config.verbosity);
    }

    #[test]
    fn test_full_invocation() {
        let matches = create()
            .try_get_matches_from([
                "polyart", "-g", "waves", "-n", "12", "-s", "512", "-l", "40",
                "--rescale-factor", "4", "--seed", "7", "-o", "/tmp/out", "-vv",
            ])
            .unwrap();
        let config = config_from(matches);
        assert_eq!(12, config.count);
        assert_eq!(512, config.size_px);
        assert_eq!(40, config.line_count);
        assert_eq!(4, config.rescale_factor);
        assert_eq!(Some(7), config.seed);
        assert_eq!(PathBuf::from("/tmp/out"), config.gallery_root);
        assert_eq!(2, config.verbosity);
    }

    #[test]
    fn test_gallery_is_required() {
        assert!(create().try_get_matches_from(["polyart"]).is_err());
    }

    #[test]
    fn test_count_must_be_positive() {
        assert!(create()
            .try_get_matches_from(["polyart", "-g", "x", "-n", "0"])
            .is_err());
    }
}
