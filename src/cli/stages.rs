use std::path::Path;

use anyhow::Result;

use nlpipe_core::{EntityExtractor, PhraseExtractor};

use super::{input, Settings};

pub fn run_tokens(settings: &Settings<'_>, text: Option<String>, file: Option<&Path>) -> Result<()> {
    let pipeline = settings.pipeline()?;
    let text = input::read_text(text, file)?;
    for token in pipeline.filtered_tokens(&text) {
        println!("{token}");
    }
    Ok(())
}

pub fn run_entities(
    settings: &Settings<'_>,
    text: Option<String>,
    file: Option<&Path>,
) -> Result<()> {
    let pipeline = settings.pipeline()?;
    let text = input::read_text(text, file)?;
    let doc = pipeline.analyze(&text)?;
    for entity in EntityExtractor::new().extract(&doc, &text) {
        println!("{}\t{}", entity.text, entity.label);
    }
    Ok(())
}

pub fn run_phrases(
    settings: &Settings<'_>,
    text: Option<String>,
    file: Option<&Path>,
) -> Result<()> {
    let pipeline = settings.pipeline()?;
    let text = input::read_text(text, file)?;
    let doc = pipeline.analyze(&text)?;
    for phrase in PhraseExtractor::new().extract(&doc, &text) {
        println!("{phrase}");
    }
    Ok(())
}
