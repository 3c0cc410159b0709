mod common;

use navtrail_ai::context::{MAX_CONTEXT_ENTRIES, MAX_ENTRY_CHARS, build_log_context};
use navtrail_ai::prompts::{chat_system_prompt, recommendations_prompt, TRAVEL_ASSISTANT_PROMPT};

#[test]
fn context_block_includes_stats_and_entries() {
    let log = common::portugal_log();
    let block = build_log_context(&log);

    assert!(block.starts_with("<travel_log>\n"));
    assert!(block.ends_with("</travel_log>"));
    assert!(block.contains("title: Portugal by rail"));
    assert!(block.contains("dates: 2024-06-01 to 2024-06-10"));
    assert!(block.contains("cities: Lisbon, Porto"));
    assert!(block.contains("countries: Portugal"));
    assert!(block.contains(
        "<entry date=\"2024-06-02\" mood=\"excited\" location=\"Alfama, Lisbon, Portugal\">"
    ));
    assert!(block.contains("activities: Walking tour; Port tasting"));
}

#[test]
fn long_content_is_truncated() {
    let mut log = common::portugal_log();
    log.entries[0].content = "x".repeat(MAX_ENTRY_CHARS * 2);
    let block = build_log_context(&log);
    assert!(block.contains(&"x".repeat(MAX_ENTRY_CHARS)));
    assert!(!block.contains(&"x".repeat(MAX_ENTRY_CHARS + 1)));
}

#[test]
fn excess_entries_are_summarised() {
    let mut log = common::portugal_log();
    let template = log.entries[0].clone();
    for _ in 0..MAX_CONTEXT_ENTRIES {
        log.entries.push(template.clone());
    }
    let block = build_log_context(&log);
    assert_eq!(block.matches("<entry ").count(), MAX_CONTEXT_ENTRIES);
    assert!(block.contains("(2 more entries omitted)"));
}

#[test]
fn chat_prompt_embeds_log_only_when_given() {
    assert_eq!(chat_system_prompt(None), TRAVEL_ASSISTANT_PROMPT);
    let log = common::portugal_log();
    let with_log = chat_system_prompt(Some(&log));
    assert!(with_log.starts_with(TRAVEL_ASSISTANT_PROMPT));
    assert!(with_log.contains("<travel_log>"));
}

#[test]
fn recommendations_prompt_lists_history() {
    let log = common::portugal_log();
    let prompt = recommendations_prompt(&[log], Some("  beaches  "));
    assert!(prompt.contains("trips: 1"));
    assert!(prompt.contains("countries visited: Portugal"));
    assert!(prompt.contains("trip tags: europe, food"));
    assert!(prompt.contains("preferences: beaches"));
}
