//! Built-in question/answer set shipped with the assistant.

use once_cell::sync::Lazy;

use super::QnaEntry;

pub const BUILTIN_SOURCE: &str = "builtin";

const BUILTIN_QNA: &[(&str, &str)] = &[
    // Diabetes
    (
        "What are the early signs of diabetes?",
        "Excess thirst/urination, fatigue, blurry vision, slow-healing wounds, unexplained weight loss.",
    ),
    (
        "How is diabetes diagnosed?",
        "Fasting glucose ≥126 mg/dL, A1c ≥6.5%, random glucose ≥200 mg/dL with symptoms, or failed oral glucose tolerance.",
    ),
    (
        "What’s a good A1c target?",
        "Most adults: <7%. Older/complex patients may aim a bit higher; individualize with a doctor.",
    ),
    (
        "Do I need medicine or can diet fix it?",
        "Type 2: start with diet/exercise; metformin is first-line if targets aren’t met. Type 1 always needs insulin.",
    ),
    (
        "What should I eat?",
        "High fiber, lean protein, non-starchy veggies; limit refined carbs/sugary drinks; consistent portions; track carbs.",
    ),
    (
        "How often should I check sugar?",
        "On insulin: multiple times daily or use CGM. On pills/stable: at least a few times/week and before key changes.",
    ),
    (
        "What to do for low sugar (hypo)?",
        "If <70 mg/dL or symptoms: take 15 g fast carbs (glucose tabs/juice), recheck in 15 min, repeat if needed.",
    ),
    (
        "High sugar?",
        "Hydrate, walk (if no ketones/illness), check ketones if >250 mg/dL, adjust per plan, call doctor if persistent.",
    ),
    (
        "Must-have yearly checks?",
        "Eyes (retina), kidney (urine albumin), feet/neuropathy, lipids, blood pressure, vaccines.",
    ),
    (
        "Can diabetes be reversed?",
        "Type 2: remission possible with weight loss, diet, and activity (not guaranteed). Type 1: cannot be reversed.",
    ),
    // Cancer
    (
        "What are general red flags?",
        "Unintentional weight loss, persistent pain, new lumps, abnormal bleeding, non-healing sores, cough/voice change >3 weeks.",
    ),
    (
        "How is cancer confirmed?",
        "Biopsy. Imaging suggests; pathology proves.",
    ),
    (
        "What does stage mean?",
        "Extent of spread (size, nodes, metastasis). Stage drives treatment and prognosis.",
    ),
    (
        "Do all cancers need chemo?",
        "No. Some need surgery only; others get radiation, targeted therapy, immunotherapy, or combinations.",
    ),
    (
        "Are chemo side effects inevitable?",
        "Common (fatigue, nausea, hair loss), but modern anti-nausea and supportive meds reduce them significantly.",
    ),
    (
        "Should I take supplements during treatment?",
        "Don’t start anything without oncologist approval; some interact and blunt treatment.",
    ),
    (
        "Is screening actually useful?",
        "Yes. Colon, breast, cervical, and high-risk lung screenings cut deaths when done on schedule.",
    ),
    (
        "Can lifestyle affect outcomes?",
        "Yes. No tobacco/alcohol moderation, exercise, weight control, and good sleep improve tolerance and survival odds.",
    ),
    // Abdominal ultrasound
    (
        "What is an abdominal ultrasound?",
        "A non-invasive test using high-frequency sound waves to image abdominal organs (liver, kidneys, pancreas, gallbladder, spleen, aorta).",
    ),
    (
        "Why is an abdominal ultrasound done?",
        "To evaluate pain, swelling, abnormal labs, liver disease, gallstones/kidney stones, tumors, or internal bleeding after trauma.",
    ),
    (
        "Is abdominal ultrasound safe?",
        "Yes. No radiation; painless; no known side effects when performed correctly.",
    ),
    (
        "How should I prepare for an abdominal ultrasound?",
        "Usually fast 8 hours to keep stomach empty and reduce gas; sometimes arrive with full bladder if instructed.",
    ),
    (
        "What happens during the procedure?",
        "You lie down; gel applied; a probe is moved over the abdomen to capture images on a screen.",
    ),
    (
        "How long does the test take?",
        "About 20-30 minutes depending on how many organs are examined.",
    ),
    (
        "Does it hurt?",
        "No. It’s painless, though you may feel mild pressure or cool gel.",
    ),
    (
        "What problems can an abdominal ultrasound detect?",
        "Cirrhosis, gallstones, kidney stones, tumors/cysts, fluid, blocked bile ducts, enlarged organs, abdominal aortic aneurysm.",
    ),
    (
        "Are there limitations to this test?",
        "Gas/obesity can reduce image quality; intestines and bone are harder to see. CT/MRI may be needed for more detail.",
    ),
    (
        "What do normal and abnormal results mean?",
        "Normal: organs look healthy; Abnormal: stones, cysts, tumors, infection, organ damage, or bleeding. May need further tests/treatment.",
    ),
];

static BUILTIN: Lazy<Vec<QnaEntry>> = Lazy::new(|| {
    BUILTIN_QNA
        .iter()
        .map(|(q, a)| QnaEntry::new(*q, *a, BUILTIN_SOURCE))
        .collect()
});

/// The built-in entries in definition order.
pub fn builtin_entries() -> &'static [QnaEntry] {
    &BUILTIN
}
