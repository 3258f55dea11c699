//! Interactive menu loop over the three lookup operations.

use std::io::{self, BufRead, Write};

use sctau_finder::{ConceptFinder, FinderError, SqlExecutor};
use sctau_types::Concept;

/// Continually prompt the user with the menu and run the selected
/// operation. Returns when the user quits or input reaches end-of-file.
pub fn run<E: SqlExecutor>(
    finder: &ConceptFinder<'_, E>,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<()> {
    writeln!(output, "This application is not for clinical use.")?;

    loop {
        print_menu(output)?;
        let Some(selection) = read_line(input)? else {
            return Ok(());
        };

        match selection.trim() {
            "1" => find_concept_by_id(finder, input, output)?,
            "2" => find_concept_by_term(finder, input, output)?,
            "3" => list_refset_members(finder, input, output)?,
            "Q" | "q" => return Ok(()),
            "" => {}
            _ => writeln!(output, "Invalid option!")?,
        }
    }
}

fn print_menu(output: &mut impl Write) -> io::Result<()> {
    writeln!(output, "\n\nOptions:")?;
    writeln!(output, "\t1. Find concept by SCT ID")?;
    writeln!(output, "\t2. Find concept by term")?;
    writeln!(output, "\t3. List all members of a refset")?;
    writeln!(output, "\tQ. Quit")?;
    writeln!(output, "\n\nEnter selection:")
}

fn find_concept_by_id<E: SqlExecutor>(
    finder: &ConceptFinder<'_, E>,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<()> {
    writeln!(output, "\nFinding concept by SCT ID...")?;
    writeln!(output, "\nEnter SCT ID of concept:")?;

    let Some(sct_id) = read_sct_id(input, output)? else {
        return Ok(());
    };

    match finder.find_by_id(sct_id) {
        Ok(Some(concept)) => write!(output, "{concept}"),
        Ok(None) => writeln!(output, "No concept found with SCT ID {sct_id}"),
        Err(err) => report_failure(output, err),
    }
}

fn find_concept_by_term<E: SqlExecutor>(
    finder: &ConceptFinder<'_, E>,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<()> {
    writeln!(output, "\nFinding concept by term...")?;
    writeln!(output, "\nEnter partial term:")?;

    let Some(term) = read_line(input)? else {
        return Ok(());
    };

    match finder.find_by_term(term.trim()) {
        Ok(concepts) => print_concepts(output, &concepts, finder.result_limit()),
        Err(err) => report_failure(output, err),
    }
}

fn list_refset_members<E: SqlExecutor>(
    finder: &ConceptFinder<'_, E>,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<()> {
    writeln!(output, "\nListing all members of a refset...")?;
    writeln!(output, "\nEnter SCT ID of refset:")?;

    let Some(sct_id) = read_sct_id(input, output)? else {
        return Ok(());
    };

    match finder.find_refset_members(sct_id) {
        Ok(concepts) => print_concepts(output, &concepts, finder.result_limit()),
        Err(err) => report_failure(output, err),
    }
}

/// Prints each concept with a `Concept <n> of <total>` header, marking the
/// total `(limited)` when it equals the configured result cap.
fn print_concepts(
    output: &mut impl Write,
    concepts: &[Concept],
    result_limit: usize,
) -> io::Result<()> {
    if concepts.is_empty() {
        return writeln!(output, "No suitable concepts found!");
    }

    let mut result_count = concepts.len().to_string();
    if concepts.len() == result_limit {
        result_count.push_str(" (limited)");
    }

    for (number, concept) in concepts.iter().enumerate() {
        writeln!(output, "Concept {} of {result_count}", number + 1)?;
        write!(output, "{concept}")?;
    }
    Ok(())
}

fn report_failure(output: &mut impl Write, err: FinderError) -> io::Result<()> {
    tracing::error!("query failed: {err}");
    writeln!(output, "Query failed: {err}")
}

/// Reads one line, returning `None` at end-of-file.
fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Reads one line and parses it as an SCTID, reporting invalid input.
fn read_sct_id(input: &mut impl BufRead, output: &mut impl Write) -> io::Result<Option<u64>> {
    let Some(line) = read_line(input)? else {
        return Ok(None);
    };
    match line.trim().parse() {
        Ok(sct_id) => Ok(Some(sct_id)),
        Err(_) => {
            writeln!(output, "Invalid SCT ID!")?;
            Ok(None)
        }
    }
}
