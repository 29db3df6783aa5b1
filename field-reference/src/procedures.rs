//! Emergency procedure catalog
//!
//! Step-by-step protocols and checklists an EMT can pull up on scene.
//! The catalog is compiled in and read-only.

use serde::Serialize;

/// How urgently a protocol is typically needed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    High,
    Medium,
}

impl Urgency {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "high" => Some(Urgency::High),
            "medium" => Some(Urgency::Medium),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::High => "high",
            Urgency::Medium => "medium",
        }
    }
}

/// Whether steps are followed in order or ticked off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcedureKind {
    Guidance,
    Checklist,
}

/// Stable identifier of a catalog entry, e.g. `cardiac-arrest`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProcedureId(pub &'static str);

impl std::fmt::Display for ProcedureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Procedure {
    pub id: ProcedureId,
    pub name: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub urgency: Urgency,
    pub estimated_time: &'static str,
    pub kind: ProcedureKind,
    pub steps: &'static [&'static str],
}

impl Procedure {
    fn title_matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.id.0.replace('-', " ").contains(needle)
    }

    fn steps_mention(&self, needle: &str) -> bool {
        self.steps.iter().any(|step| step.to_lowercase().contains(needle))
    }
}

static PROCEDURES: &[Procedure] = &[
    Procedure {
        id: ProcedureId("cardiac-arrest"),
        name: "Cardiac Arrest Protocol",
        category: "Critical Care",
        description: "Adult cardiac arrest management protocol",
        urgency: Urgency::High,
        estimated_time: "30+ min",
        kind: ProcedureKind::Guidance,
        steps: &[
            "Ensure scene safety and use PPE",
            "Check responsiveness - tap shoulders and shout",
            "Call for help and request AED/defibrillator",
            "Check for pulse (carotid) for no more than 10 seconds",
            "Begin high-quality CPR - 30 compressions at 100-120/min, depth 2-2.4 inches",
            "Open airway using head-tilt chin-lift",
            "Give 2 rescue breaths - each over 1 second",
            "Continue CPR cycles (30:2) until AED arrives",
            "Apply AED pads and follow voice prompts",
            "Resume CPR immediately after shock or \"no shock advised\"",
            "Consider advanced airway after 2 cycles",
            "Administer medications per protocol",
        ],
    },
    Procedure {
        id: ProcedureId("anaphylaxis"),
        name: "Anaphylaxis Treatment",
        category: "Critical Care",
        description: "Severe allergic reaction management",
        urgency: Urgency::High,
        estimated_time: "15-20 min",
        kind: ProcedureKind::Checklist,
        steps: &[
            "Assess for signs: difficulty breathing, swelling, rash, hypotension",
            "Remove allergen if possible",
            "Position patient supine (or sitting if respiratory distress)",
            "Administer epinephrine 0.3-0.5mg IM (lateral thigh)",
            "High-flow oxygen via non-rebreather mask",
            "Establish large-bore IV access",
            "Normal saline bolus 20ml/kg",
            "Monitor vital signs continuously",
            "Prepare for potential intubation",
            "Consider diphenhydramine 25-50mg IV/IM",
            "Consider albuterol nebulizer for bronchospasm",
            "Rapid transport to emergency facility",
        ],
    },
    Procedure {
        id: ProcedureId("stroke-assessment"),
        name: "Stroke Assessment (FAST)",
        category: "Neurological",
        description: "Rapid stroke identification protocol",
        urgency: Urgency::High,
        estimated_time: "5-10 min",
        kind: ProcedureKind::Checklist,
        steps: &[
            "Face - Check for facial droop (ask to smile)",
            "Arms - Check for arm drift (raise both arms)",
            "Speech - Check for slurred speech (repeat phrase)",
            "Time - Note time of symptom onset",
            "Check blood glucose level",
            "Perform Cincinnati Stroke Scale",
            "Assess for contraindications to thrombolytics",
            "Keep NPO (nothing by mouth)",
            "Position with head elevated 30 degrees",
            "Avoid blood pressure reduction unless >220/120",
            "Establish IV access (avoid affected side)",
            "Rapid transport to stroke center",
        ],
    },
    Procedure {
        id: ProcedureId("trauma-assessment"),
        name: "Trauma Assessment",
        category: "Trauma",
        description: "Primary and secondary trauma survey",
        urgency: Urgency::High,
        estimated_time: "10-15 min",
        kind: ProcedureKind::Guidance,
        steps: &[
            "Scene safety and BSI precautions",
            "Primary Survey - ABCDE approach",
            "A - Airway with C-spine protection",
            "B - Breathing and ventilation assessment",
            "C - Circulation with hemorrhage control",
            "D - Disability (neurological status)",
            "E - Exposure/Environmental control",
            "Control major bleeding with direct pressure",
            "Secondary survey - head to toe assessment",
            "Obtain SAMPLE history",
            "Splint fractures after life threats addressed",
            "Package for transport with spinal precautions if indicated",
        ],
    },
    Procedure {
        id: ProcedureId("diabetic-emergency"),
        name: "Diabetic Emergency",
        category: "Medical",
        description: "Hypoglycemia/hyperglycemia management",
        urgency: Urgency::Medium,
        estimated_time: "10-15 min",
        kind: ProcedureKind::Guidance,
        steps: &[
            "Check blood glucose level immediately",
            "If <70 mg/dL and conscious: oral glucose 15-20g",
            "If <70 mg/dL and unconscious: D50 25g IV or glucagon 1mg IM",
            "If >250 mg/dL: assess for DKA signs",
            "Check for ketones if available",
            "Establish IV access",
            "Normal saline 500-1000ml bolus if dehydrated",
            "Monitor mental status",
            "Recheck glucose in 15 minutes",
            "Assess for other causes of altered mental status",
            "Document all medications given",
            "Transport for further evaluation",
        ],
    },
    Procedure {
        id: ProcedureId("respiratory-distress"),
        name: "Respiratory Distress",
        category: "Respiratory",
        description: "Acute respiratory distress management",
        urgency: Urgency::High,
        estimated_time: "15-20 min",
        kind: ProcedureKind::Checklist,
        steps: &[
            "Position patient upright unless contraindicated",
            "High-flow oxygen to maintain SpO2 >94%",
            "Assess breath sounds bilaterally",
            "Check for JVD, pedal edema (CHF signs)",
            "Obtain 12-lead ECG if cardiac cause suspected",
            "CPAP if available and indicated",
            "Albuterol 2.5mg nebulizer for wheezing",
            "Consider epinephrine for suspected anaphylaxis",
            "Assist ventilations if inadequate",
            "Monitor ETCO2 if available",
            "IV access and cardiac monitoring",
            "Rapid transport maintaining position of comfort",
        ],
    },
    Procedure {
        id: ProcedureId("seizure-management"),
        name: "Seizure Management",
        category: "Neurological",
        description: "Active seizure and postictal care",
        urgency: Urgency::Medium,
        estimated_time: "10-15 min",
        kind: ProcedureKind::Guidance,
        steps: &[
            "Ensure patient safety - remove hazards",
            "Do not restrain or insert anything in mouth",
            "Time the seizure duration",
            "Protect head with padding",
            "Administer oxygen via nasal cannula",
            "Check blood glucose when possible",
            "If seizure >5 min: midazolam 10mg IM or 5mg IN",
            "Alternative: diazepam 5-10mg IV/rectal",
            "Position lateral recumbent post-seizure",
            "Suction airway PRN",
            "Monitor vital signs and mental status",
            "Document seizure characteristics",
        ],
    },
    Procedure {
        id: ProcedureId("chest-pain"),
        name: "Chest Pain Protocol",
        category: "Cardiac",
        description: "Acute coronary syndrome assessment",
        urgency: Urgency::Medium,
        estimated_time: "15-20 min",
        kind: ProcedureKind::Checklist,
        steps: &[
            "Obtain 12-lead ECG within 10 minutes",
            "Administer oxygen if SpO2 <94%",
            "Aspirin 324mg chewed (if not allergic)",
            "Nitroglycerin 0.4mg SL (if SBP >100)",
            "Establish IV access",
            "Pain assessment using 0-10 scale",
            "OPQRST pain assessment",
            "Obtain full set of vital signs",
            "Continuous cardiac monitoring",
            "Repeat ECG if symptoms change",
            "Consider fentanyl for pain if indicated",
            "Transmit ECG and notify receiving facility",
        ],
    },
    Procedure {
        id: ProcedureId("obstetric-emergency"),
        name: "Obstetric Emergency",
        category: "OB/GYN",
        description: "Emergency childbirth and complications",
        urgency: Urgency::High,
        estimated_time: "20-30 min",
        kind: ProcedureKind::Guidance,
        steps: &[
            "Determine gestational age and due date",
            "Time contractions (frequency and duration)",
            "Check for crowning or visible presenting part",
            "Position mother semi-recumbent",
            "Prepare OB kit and warm blankets",
            "If delivery imminent: support head as it delivers",
            "Check for nuchal cord, slip over head if loose",
            "Support body during delivery",
            "Dry and stimulate infant immediately",
            "Clamp and cut cord after 1-3 minutes",
            "APGAR score at 1 and 5 minutes",
            "Deliver placenta, save for inspection",
            "Massage uterus and monitor for bleeding",
        ],
    },
    Procedure {
        id: ProcedureId("burns"),
        name: "Burn Management",
        category: "Trauma",
        description: "Thermal burn assessment and treatment",
        urgency: Urgency::Medium,
        estimated_time: "15-20 min",
        kind: ProcedureKind::Checklist,
        steps: &[
            "Stop burning process - remove from source",
            "Remove jewelry and non-adherent clothing",
            "Estimate TBSA using Rule of 9s",
            "Cool burns with room temperature water",
            "Cover burns with clean, dry dressing",
            "Do not apply ice or ointments",
            "Assess for inhalation injury signs",
            "High-flow oxygen for all significant burns",
            "IV access for burns >10% TBSA",
            "Fluid resuscitation per Parkland formula",
            "Pain management with narcotic analgesia",
            "Keep patient warm to prevent hypothermia",
        ],
    },
];

/// Read-only view over the built-in procedures
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcedureCatalog;

impl ProcedureCatalog {
    pub fn new() -> Self {
        Self
    }

    pub fn all(&self) -> &'static [Procedure] {
        PROCEDURES
    }

    pub fn by_id(&self, id: &str) -> Option<&'static Procedure> {
        PROCEDURES.iter().find(|p| p.id.0 == id)
    }

    /// Category names compare case-insensitively
    pub fn by_category(&self, category: &str) -> Vec<&'static Procedure> {
        PROCEDURES
            .iter()
            .filter(|p| p.category.eq_ignore_ascii_case(category))
            .collect()
    }

    pub fn by_urgency(&self, urgency: Urgency) -> Vec<&'static Procedure> {
        PROCEDURES.iter().filter(|p| p.urgency == urgency).collect()
    }

    /// Resolve a spoken keyword to a procedure.
    ///
    /// Names and ids are searched before steps, so "trauma" lands on the
    /// trauma survey rather than a protocol that merely mentions trauma.
    /// Within each pass the first catalog entry wins.
    pub fn find_by_keyword(&self, keyword: &str) -> Option<&'static Procedure> {
        let needle = keyword.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        PROCEDURES
            .iter()
            .find(|p| p.title_matches(&needle))
            .or_else(|| PROCEDURES.iter().find(|p| p.steps_mention(&needle)))
    }

    pub fn categories(&self) -> Vec<&'static str> {
        let mut categories: Vec<&'static str> = Vec::new();
        for procedure in PROCEDURES {
            if !categories.contains(&procedure.category) {
                categories.push(procedure.category);
            }
        }
        categories
    }
}
