use std::io::{self, Write};

use kana_core::romaji::{explain, ExplainResult, ExplainStep, Unit};
use kana_core::Options;

fn describe_unit(unit: Option<&Unit>) -> String {
    match unit {
        Some(Unit::Syllable(s)) => format!("syllable {s}"),
        Some(Unit::Sokuon) => "sokuon".to_string(),
        Some(Unit::Youon(mark)) => format!("yoon {}", mark.letters()),
        Some(Unit::Chouonpu) => "chouonpu".to_string(),
        Some(Unit::Separator) => "separator".to_string(),
        None => "invalid".to_string(),
    }
}

fn write_step<W: Write>(out: &mut W, step: &ExplainStep) -> io::Result<()> {
    let kana = step.kana.map_or_else(|| "?".to_string(), |c| c.to_string());
    writeln!(
        out,
        "{:>4}  U+{:04X} {}  {:<14} emit={:<6} pending={:<6}{}",
        step.offset,
        step.scalar,
        kana,
        describe_unit(step.unit.as_ref()),
        format!("{:?}", step.emitted),
        step.pending.as_deref().unwrap_or("-"),
        if step.sokuon_armed { "  (sokuon)" } else { "" },
    )
}

pub fn write_explain<W: Write>(out: &mut W, result: &ExplainResult, json: bool) -> io::Result<()> {
    if json {
        let text = serde_json::to_string_pretty(result).map_err(io::Error::other)?;
        return writeln!(out, "{text}");
    }

    writeln!(out, "input: {}", result.input)?;
    for step in &result.steps {
        write_step(out, step)?;
    }
    match (&result.romaji, &result.error) {
        (Some(romaji), _) => writeln!(out, "romaji: {romaji}"),
        (None, Some(e)) => writeln!(out, "error: {e}"),
        (None, None) => Ok(()),
    }
}

/// Print the step trace for `text`. Returns whether it transliterated.
pub fn explain_cmd<W: Write>(
    out: &mut W,
    text: &str,
    json: bool,
    options: &Options,
) -> io::Result<bool> {
    let result = explain(text, options);
    write_explain(out, &result, json)?;
    Ok(result.error.is_none())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(text: &str, json: bool) -> (String, bool) {
        let mut out = Vec::new();
        let ok = explain_cmd(&mut out, text, json, &Options::default()).unwrap();
        (String::from_utf8(out).unwrap(), ok)
    }

    #[test]
    fn text_output() {
        let (text, ok) = render("ちょっと", false);
        assert!(ok);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "input: ちょっと");
        assert!(lines[1].contains("U+3061"));
        assert!(lines[2].contains("yoon o"));
        assert!(lines[3].ends_with("(sokuon)"));
        assert_eq!(lines[5], "romaji: chotto");
    }

    #[test]
    fn text_output_on_error() {
        let (text, ok) = render("ーア", false);
        assert!(!ok);
        assert!(text.ends_with("error: chōonpu cannot be the first character in a block\n"));
    }

    #[test]
    fn json_output() {
        let (text, ok) = render("アー", true);
        assert!(ok);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["romaji"], "aa");
        assert_eq!(value["steps"][1]["unit"]["kind"], "chouonpu");
        assert_eq!(value["steps"][1]["pending"], "aa");
    }
}
