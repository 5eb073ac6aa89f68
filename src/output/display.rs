//! Display functions for command results

use super::formatters::{create_progress_bar, percentage};
use crate::commands::{ProcessReport, WordReport};
use crate::core::{DefinitionRecord, Difficulty};
use crate::dictionary::DictionaryStats;
use colored::Colorize;

fn banner(title: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", title.bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
}

/// Print what the processing pipeline read and built
pub fn print_process_report(report: &ProcessReport) {
    banner("PROCESSING COMPLETE");

    println!("\n📚 {}", "Corpora:".bright_cyan().bold());
    for corpus in &report.corpora {
        if corpus.missing {
            println!("   {:<24} {}", corpus.corpus.to_string(), "not found".yellow());
            continue;
        }
        println!(
            "   {:<24} {} records  ({} lines, {} skipped, {} unparseable, {} rejected)",
            corpus.corpus.to_string(),
            corpus.records.to_string().bright_yellow(),
            corpus.stats.lines,
            corpus.stats.skipped,
            corpus.stats.unparseable,
            corpus.stats.rejected
        );
    }

    print_dictionary_stats(&report.dictionary);
    println!("\n   Time taken:       {:.2}s", report.duration.as_secs_f64());
}

/// Print counts for a loaded dictionary
pub fn print_stats(stats: &DictionaryStats) {
    banner("DICTIONARY STATISTICS");
    print_dictionary_stats(stats);
}

/// Each bucket's count and its share of all bucketed records
///
/// Buckets keep duplicate word-list entries, so shares are taken over the
/// bucket total rather than the distinct word count.
fn bucket_shares(stats: &DictionaryStats) -> [(Difficulty, usize, f64); 3] {
    let bucketed = stats.easy + stats.medium + stats.hard;
    [
        (Difficulty::Easy, stats.easy),
        (Difficulty::Medium, stats.medium),
        (Difficulty::Hard, stats.hard),
    ]
    .map(|(level, count)| (level, count, percentage(count, bucketed)))
}

fn print_dictionary_stats(stats: &DictionaryStats) {
    println!("\n📊 {}", "Words:".bright_cyan().bold());
    println!(
        "   Total:            {}",
        stats.total_words.to_string().bright_yellow().bold()
    );

    for (level, count, pct) in bucket_shares(stats) {
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {:<8} {} {count:7} ({pct:5.1}%)", level.as_str(), bar.green());
    }

    println!("\n🔤 {}", "Sounds & meanings:".bright_cyan().bold());
    println!("   Pronunciations:   {}", stats.phonetics);
    println!("   Rhyme groups:     {}", stats.rhyme_groups);
    println!("   Defined words:    {}", stats.definitions);
}

pub fn print_word_report(report: &WordReport) {
    let word = report.word.to_uppercase();
    if !report.valid {
        println!("{} {}", "✗".red().bold(), format!("{word} is not in the word list").red());
        return;
    }

    println!("{} {}", "✓".green().bold(), word.bright_yellow().bold());
    if let Some(level) = report.difficulty {
        println!("   Difficulty:   {level}");
    }
    if let Some(transcription) = &report.transcription {
        println!("   Phonetic:     {transcription}");
    }
    println!("   Rhymes:       {}", report.rhymes);
    println!("   Definitions:  {}", report.definitions);
}

pub fn print_definition(word: &str, record: Option<&DefinitionRecord>) {
    let Some(record) = record else {
        println!("No definition found for {}", word.to_uppercase().bold());
        return;
    };

    let mut heading = record.word.to_uppercase().bright_yellow().bold().to_string();
    if let Some(pronunciation) = &record.pronunciation {
        heading.push_str(&format!("  {pronunciation}"));
    }
    if let Some(part_of_speech) = &record.part_of_speech {
        heading.push_str(&format!("  {}", part_of_speech.italic()));
    }
    println!("\n{heading}");

    for (i, definition) in record.definitions.iter().enumerate() {
        println!("  {}. {definition}", (i + 1).to_string().bright_black());
    }
}

/// Print a list of words under a heading, wrapped to a fixed width
pub fn print_word_list(title: &str, words: &[String]) {
    if words.is_empty() {
        println!("{}: {}", title.bright_cyan().bold(), "none".bright_black());
        return;
    }

    println!("{} ({}):", title.bright_cyan().bold(), words.len());
    for chunk in words.chunks(8) {
        println!("   {}", chunk.join("  "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_shares_stay_within_total_with_duplicates() {
        // "cat" listed twice: 2 distinct words, 3 bucketed records
        let stats = DictionaryStats {
            total_words: 2,
            easy: 2,
            medium: 1,
            hard: 0,
            phonetics: 0,
            rhyme_groups: 0,
            definitions: 0,
        };
        let shares = bucket_shares(&stats);

        let total: f64 = shares.iter().map(|(_, _, pct)| pct).sum();
        assert!((total - 100.0).abs() < 1e-9);
        assert_eq!(shares[0].1, 2);
        assert!(shares.iter().all(|(_, _, pct)| *pct <= 100.0));
    }

    #[test]
    fn bucket_shares_empty_dictionary() {
        let stats = DictionaryStats {
            total_words: 0,
            easy: 0,
            medium: 0,
            hard: 0,
            phonetics: 0,
            rhyme_groups: 0,
            definitions: 0,
        };
        assert!(bucket_shares(&stats).iter().all(|(_, _, pct)| pct.abs() < f64::EPSILON));
    }
}
