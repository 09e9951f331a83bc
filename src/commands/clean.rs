use crate::{
    CleanArgs,
    config::{SiteConfig, SiteMode},
};

pub fn run(args: &CleanArgs) -> Result<(), anyhow::Error> {
    let root = if args.root.is_relative() {
        std::env::current_dir()?.join(&args.root)
    } else {
        args.root.clone()
    };

    // The mode doesn't affect where the site lives
    let config = SiteConfig::new(root, args.output.clone(), SiteMode::Notes);

    let site_path = config.output;
    if site_path.exists() {
        if args.dry_run {
            println!("Would delete {}", site_path.display());
        } else {
            std::fs::remove_dir_all(&site_path)?;
            println!("Deleted {}", site_path.display());
        }
    }

    Ok(())
}
