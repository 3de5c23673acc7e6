//! Plain-text rendering of router responses.

use std::fmt::Write;

use super::Response;
use crate::advice::{
    safety::{details_of, FlagKind},
    SafetyFlag,
};

pub const WELCOME: &str = "Hi! I can answer from your Q&A first. Ask me: What are the early signs of diabetes?\n\nYou can also ask about symptoms like headache or a medicine like paracetamol.";
pub const GREETING: &str =
    "Hello! Tell me your main problem, or upload a Q&A file and ask me from that.";
pub const FALLBACK: &str =
    "Sorry, I'm not trained on that. Try uploading Q&A or ask a common complaint/medicine.";

pub fn render(response: &Response) -> String {
    match response {
        Response::QnaSingle {
            answer,
            score,
            source_id,
            ..
        } => format!("{answer}\n\n> From Q&A (match: {score:.3}, source: {source_id})"),
        Response::QnaAmbiguous { candidates } => {
            let mut out = String::from("I found related entries in your Q&A:");
            for c in candidates {
                let _ = write!(
                    out,
                    "\n- Q: {}\n  A: {} (match {:.3}, src: {})",
                    c.question, c.answer, c.score, c.source
                );
            }
            out
        }
        Response::Greeting => GREETING.to_string(),
        Response::ConditionAdvice { plan, flags, .. } => {
            let mut lines = vec![format!("Problem: {}", plan.title)];
            if !plan.regimen.is_empty() {
                lines.push(String::new());
                lines.push("Suggested:".to_string());
                lines.extend(plan.regimen.iter().map(|r| format!("• {r}")));
            }
            lines.extend(plan.notes.iter().cloned());
            if !plan.red_flags.is_empty() {
                lines.push(format!("Seek care if: {}", plan.red_flags.join(", ")));
            }
            push_flags(&mut lines, flags);
            lines.join("\n")
        }
        Response::DrugAdvice { drug, flags } => {
            let mut lines = vec![
                format!("Medicine: {}", drug.title()),
                format!("Class: {}", drug.drug_class),
                String::new(),
                format!("Dose: {}", drug.adult_dose),
                format!("Notes: {}", drug.notes),
            ];
            push_flags(&mut lines, flags);
            lines.join("\n")
        }
        Response::Fallback => FALLBACK.to_string(),
    }
}

fn push_flags(lines: &mut Vec<String>, flags: &[SafetyFlag]) {
    let contra = details_of(flags, FlagKind::Contraindication);
    let caution = details_of(flags, FlagKind::Caution);
    if contra.is_empty() && caution.is_empty() {
        return;
    }
    lines.push(String::new());
    if !contra.is_empty() {
        lines.push(format!("Contra: {}", contra.join(", ")));
    }
    if !caution.is_empty() {
        lines.push(format!("Caution: {}", caution.join(", ")));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advice::drugs::drug_by_key;

    #[test]
    fn drug_advice_without_flags() {
        let Some(drug) = drug_by_key("cetirizine") else {
            panic!("cetirizine missing");
        };
        let text = render(&Response::DrugAdvice {
            drug,
            flags: Vec::new(),
        });
        insta::assert_snapshot!(text, @r"
        Medicine: Cetirizine
        Class: Antihistamine

        Dose: 10 mg once daily (may cause drowsiness).
        Notes: Avoid driving/operating machinery if drowsy.
        ");
    }

    #[test]
    fn flags_are_grouped_by_kind() {
        let Some(drug) = drug_by_key("ibuprofen") else {
            panic!("ibuprofen missing");
        };
        let flags = vec![
            SafetyFlag {
                kind: FlagKind::Caution,
                detail: "gastritis".into(),
            },
            SafetyFlag {
                kind: FlagKind::Contraindication,
                detail: "active_ulcer".into(),
            },
            SafetyFlag {
                kind: FlagKind::Caution,
                detail: "asthma".into(),
            },
        ];
        let text = render(&Response::DrugAdvice { drug, flags });
        assert!(text.ends_with("\n\nContra: active_ulcer\nCaution: asthma, gastritis"));
    }
}
