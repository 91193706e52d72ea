//! Plain-text rendering of the dashboard panels for the terminal.

use std::fmt::Write;

use surgisense_core::models::chat::{ChatMessage, ChatRole};
use surgisense_core::models::medication::Medication;
use surgisense_core::models::recovery::RecoveryProfile;
use surgisense_core::models::scan::ScanData;
use surgisense_severity::{Score, SeverityAssessment};

use crate::views::discharge::DischargeView;
use crate::views::scanner::ScannerView;
use crate::views::voice::VoiceView;
use crate::views::wound::WoundView;

const BAR_FILLED: char = '█';
const BAR_EMPTY: char = '░';

pub fn recovery_header(profile: &RecoveryProfile, today: jiff::civil::Date) -> String {
    format!(
        "{} ({})\nRecovery Progress: Day {} of {} [{}%]\n",
        profile.patient_name,
        profile.surgery_type,
        profile.recovery_day(today),
        profile.total_days,
        profile.progress_percent(today),
    )
}

/// The severity card: tier label, score and a ten-cell bar.
pub fn severity_card(assessment: &SeverityAssessment) -> String {
    let filled = usize::from(assessment.score.value());
    let empty = usize::from(Score::MAX) - filled;
    let bar: String = std::iter::repeat_n(BAR_FILLED, filled)
        .chain(std::iter::repeat_n(BAR_EMPTY, empty))
        .collect();
    format!(
        "[{}] {}  {}\n{bar} {}%\n",
        assessment.metadata.icon_id,
        assessment.metadata.label,
        assessment.score_label(),
        assessment.fill_percent(),
    )
}

pub fn wound(view: &WoundView) -> String {
    let mut out = String::from("== Vision Analysis ==\n");
    if let Some(file) = &view.selected {
        let _ = writeln!(out, "Photo: {} ({} bytes)", file.filename, file.size);
    }
    if let Some(error) = &view.error {
        let _ = writeln!(out, "! {error}");
    }
    if let Some(severity) = &view.severity {
        out.push_str(&severity_card(severity));
    }
    if let Some(analysis) = &view.analysis {
        out.push_str("-- Detailed AI Assessment --\n");
        out.push_str(analysis.trim_end());
        out.push('\n');
    }
    out
}

fn medication_line(med: &Medication) -> String {
    let mut line = format!("  • {}", med.display_name());
    if let Some(dosage) = &med.dosage {
        let _ = write!(line, " {dosage}");
    }
    if let Some(frequency) = &med.frequency {
        let _ = write!(line, " [{}]", frequency.to_uppercase());
    }
    if let Some(duration) = &med.duration {
        let _ = write!(line, " for {duration}");
    }
    line
}

pub fn scan_data(data: &ScanData) -> String {
    let mut out = format!(
        "{}\nScheduled Date: {}\n",
        data.surgery_title(),
        data.scheduled_date()
    );
    out.push_str("-- Smart Medication Tracker --\n");
    for med in &data.medication_list {
        out.push_str(&medication_line(med));
        out.push('\n');
    }
    out.push_str("-- Safety Restrictions --\n");
    for rule in &data.pre_op_restrictions {
        let _ = writeln!(out, "  • {rule}");
    }
    out
}

pub fn scanner(view: &ScannerView) -> String {
    let mut out = String::from("== Document Scanner ==\n");
    if let Some(file) = &view.selected {
        let _ = writeln!(out, "File: {}", file.filename);
    }
    if let Some(error) = &view.error {
        let _ = writeln!(out, "! {error}");
    }
    if let Some(result) = &view.result {
        out.push_str(&scan_data(result));
    }
    out
}

pub fn discharge(view: &DischargeView) -> String {
    let mut out = String::from("== Discharge Information ==\n");
    if view.rows.is_empty() {
        out.push_str("No discharge summary uploaded.\n");
        return out;
    }
    for row in &view.rows {
        let _ = writeln!(out, "{}: {}", row.label, row.value);
    }
    if let Some(record) = &view.record {
        for med in &record.medications {
            out.push_str(&medication_line(med));
            out.push('\n');
        }
    }
    out
}

pub fn voice(view: &VoiceView) -> String {
    let mut out = String::from("== Voice Intake ==\n");
    if let Some(error) = &view.error {
        let _ = writeln!(out, "! {error}");
    }
    if let Some(transcript) = &view.transcript {
        let _ = writeln!(out, "AI Transcript: \"{transcript}\"");
    }
    out
}

pub fn chat(messages: &[ChatMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let speaker = match message.role {
            ChatRole::User => "you",
            ChatRole::Assistant => "assistant",
            ChatRole::Error => "alert",
        };
        let _ = writeln!(out, "{speaker}> {}", message.content);
    }
    out
}
