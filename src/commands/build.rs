use crate::{
    BuildArgs,
    build::Builder,
    config::{SiteConfig, SiteMode},
};

pub fn run(args: &BuildArgs) -> Result<(), anyhow::Error> {
    let root = if args.root.is_relative() {
        std::env::current_dir()?.join(&args.root)
    } else {
        args.root.clone()
    };

    let mode = if args.questions {
        SiteMode::QuestionBank
    } else {
        SiteMode::Notes
    };

    let config = SiteConfig::new(root, args.output.clone(), mode);
    let builder = Builder::new(config);
    let report = builder.build()?;

    println!(
        "Site generated in {} ({} pages, {} static files)",
        report.output_dir.display(),
        report.pages,
        report.static_files
    );

    Ok(())
}
