use gvsort::{
    args::{self, Args},
    config::Config,
    discovery::Document,
    logging, processor, Error,
};
use std::io;

fn main() {
    let args = args::parse();
    logging::init_tracing(args.verbose, args.log_format);
    if let Err(err) = run(args) {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Error> {
    let patterns = Config::detect(args.config.as_deref())?.patterns(args.group_sort);
    tracing::debug!(?patterns, "group sort patterns");

    let documents = if args.inputs.is_empty() {
        vec![Document::from_reader(io::stdin())?]
    } else {
        args.inputs
            .iter()
            .map(Document::from_path)
            .collect::<Result<Vec<_>, _>>()?
    };

    let sorted = processor::process(&documents, args.preferred_only, &patterns);
    let stdout = io::stdout();
    processor::render(stdout.lock(), &sorted, args.output)?;
    Ok(())
}
