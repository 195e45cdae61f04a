use crate::{LettersArgs, letters::build_dataset_file};

pub async fn run(args: &LettersArgs) -> Result<(), anyhow::Error> {
    tracing::debug!(
        words = %args.words.display(),
        output = %args.output.display(),
        "building letters dataset"
    );

    let rows = build_dataset_file(&args.words, &args.output)?;

    tracing::info!(
        "Wrote {} word(s) to {}",
        rows,
        args.output.display()
    );

    Ok(())
}
