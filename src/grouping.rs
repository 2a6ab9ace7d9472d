//! Partitioning of flat instruction lists into named step groups.

use crate::model::{InstructionGroup, InstructionStep};

/// Cooking verbs tried when synthesizing a step title. The first entry in
/// this listed order found anywhere in the instruction wins, even
/// mid-sentence, so a later verb in the list can lose to an earlier one
/// that only appears in passing. Inherited behavior, kept as-is.
const COOKING_ACTIONS: [&str; 16] = [
    "Prepare", "Mix", "Combine", "Cook", "Bake", "Grill", "Roast", "Sauté", "Chop", "Slice",
    "Dice", "Boil", "Simmer", "Fry", "Assemble", "Serve",
];

/// Chunk size for lists without any header lines.
const CHUNK_SIZE: usize = 2;

/// Partition instructions into named, ordered groups.
///
/// A line starting with "Step" or containing a colon opens a new group and
/// names it; following lines accumulate into it. Lines before the first
/// header fold into that header's group, and a header with no body is
/// dropped. When no line is a header at all, the list is chunked into
/// fixed-size groups with synthesized titles instead.
///
/// Group and step sequence indices are zero-based and stable; downstream
/// storage consumers use them as identifiers.
pub fn group_instructions(instructions: &[String]) -> Vec<InstructionGroup> {
    let mut named: Vec<(String, Vec<String>)> = Vec::new();
    let mut current_header: Option<String> = None;
    let mut pending: Vec<String> = Vec::new();

    for instruction in instructions {
        if is_group_header(instruction) {
            if let Some(header) = current_header.take() {
                if !pending.is_empty() {
                    named.push((header, std::mem::take(&mut pending)));
                }
            }
            current_header = Some(instruction.clone());
        } else {
            pending.push(instruction.clone());
        }
    }
    if let Some(header) = current_header {
        if !pending.is_empty() {
            named.push((header, pending));
        }
    }

    if named.is_empty() {
        return chunked_groups(instructions);
    }

    named
        .into_iter()
        .enumerate()
        .map(|(index, (name, steps))| build_group(name, index, steps))
        .collect()
}

fn is_group_header(instruction: &str) -> bool {
    instruction.starts_with("Step") || instruction.contains(':')
}

fn build_group(name: String, index: usize, steps: Vec<String>) -> InstructionGroup {
    InstructionGroup {
        name,
        sequence_index: index as u32,
        steps: steps
            .into_iter()
            .enumerate()
            .map(|(step_index, text)| InstructionStep::new(step_index as u32, text))
            .collect(),
    }
}

fn chunked_groups(instructions: &[String]) -> Vec<InstructionGroup> {
    instructions
        .chunks(CHUNK_SIZE)
        .enumerate()
        .map(|(index, chunk)| {
            let number = index + 1;
            let first = chunk.first().map(String::as_str).unwrap_or_default();
            let name = format!("Step {number}: {}", step_title(number, first));
            build_group(name, index, chunk.to_vec())
        })
        .collect()
}

/// A short title for a synthesized step: the first cooking verb found in
/// the instruction plus up to the next three words, else an ordinal
/// default.
fn step_title(number: usize, instruction: &str) -> String {
    for action in COOKING_ACTIONS {
        if let Some(at) = find_case_insensitive(instruction, action) {
            return instruction[at..]
                .split(' ')
                .take(4)
                .collect::<Vec<_>>()
                .join(" ");
        }
    }

    match number {
        1 => "Prepare Ingredients".to_string(),
        2 => "Mix Components".to_string(),
        3 => "Cook".to_string(),
        4 => "Combine".to_string(),
        5 => "Finish and Serve".to_string(),
        _ => format!("Step {number}"),
    }
}

/// Byte offset of the first case-insensitive occurrence of `needle`.
fn find_case_insensitive(haystack: &str, needle: &str) -> Option<usize> {
    let needle = needle.to_lowercase();
    for (at, _) in haystack.char_indices() {
        let mut rest = haystack[at..].chars().flat_map(char::to_lowercase);
        if needle.chars().all(|wanted| rest.next() == Some(wanted)) {
            return Some(at);
        }
    }
    None
}
