use anyhow::Result;
use console::style;

use super::Settings;

pub fn run(settings: &Settings<'_>) -> Result<()> {
    let pipeline = settings.pipeline()?;
    let stopwords = pipeline.stopwords();

    eprintln!(
        "{} {} stopwords ({})",
        style("●").green(),
        stopwords.len(),
        style(stopwords.language()).bold()
    );
    for word in stopwords.sorted() {
        println!("{word}");
    }
    Ok(())
}
