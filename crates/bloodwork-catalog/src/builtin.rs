//! Built-in canonical parameter catalog.
//!
//! Units and intervals follow common UK laboratory reporting conventions.
//! Sex-specific ranges are declared only where adult reference intervals
//! genuinely differ; everything else carries a single `Both` range.
//!
//! Aliases are abbreviations and alternate spellings seen verbatim in
//! exports. Case variants are not listed; lookup handles case.

use bloodwork_model::{Parameter, RangeSex, ReferenceRange};

fn range(min: f64, max: f64, unit: &str) -> ReferenceRange {
    ReferenceRange::new(min, max, unit, RangeSex::Both)
}

fn sex_range(min: f64, max: f64, unit: &str, sex: RangeSex) -> ReferenceRange {
    ReferenceRange::new(min, max, unit, sex)
}

fn parameter(
    name: &str,
    category: &str,
    unit: &str,
    ranges: Vec<ReferenceRange>,
    aliases: &[&str],
) -> Parameter {
    Parameter {
        name: name.to_string(),
        category: category.to_string(),
        unit: unit.to_string(),
        ranges,
        aliases: aliases.iter().map(|alias| (*alias).to_string()).collect(),
    }
}

/// All built-in parameters in declaration order.
///
/// Declaration order is load-bearing: it defines output ordering for known
/// parameters and the tie-break order for fuzzy matching.
pub fn parameters() -> Vec<Parameter> {
    const FBC: &str = "Full Blood Count";
    const UE: &str = "Urea & Electrolytes";
    const LFT: &str = "Liver Function";
    const BONE: &str = "Bone Profile";
    const INFLAMMATION: &str = "Inflammation";
    const HAEMATINICS: &str = "Haematinics";
    const DIABETES: &str = "Diabetes";
    const LIPIDS: &str = "Lipids";
    const THYROID: &str = "Thyroid";

    vec![
        parameter(
            "Haemoglobin",
            FBC,
            "g/L",
            vec![
                sex_range(130.0, 170.0, "g/L", RangeSex::Male),
                sex_range(115.0, 155.0, "g/L", RangeSex::Female),
            ],
            &["Hb"],
        ),
        parameter(
            "White Cell Count",
            FBC,
            "10^9/L",
            vec![range(4.0, 11.0, "10^9/L")],
            &["WCC", "WBC", "White Blood Cells"],
        ),
        parameter(
            "Platelets",
            FBC,
            "10^9/L",
            vec![range(150.0, 400.0, "10^9/L")],
            &["PLT", "Platelet Count"],
        ),
        parameter(
            "Red Cell Count",
            FBC,
            "10^12/L",
            vec![
                sex_range(4.3, 5.7, "10^12/L", RangeSex::Male),
                sex_range(3.8, 5.2, "10^12/L", RangeSex::Female),
            ],
            &["RBC", "Red Blood Cells"],
        ),
        parameter(
            "Haematocrit",
            FBC,
            "L/L",
            vec![
                sex_range(0.40, 0.50, "L/L", RangeSex::Male),
                sex_range(0.36, 0.46, "L/L", RangeSex::Female),
            ],
            &["HCT", "PCV", "Packed Cell Volume"],
        ),
        parameter(
            "Mean Cell Volume",
            FBC,
            "fL",
            vec![range(80.0, 100.0, "fL")],
            &["MCV"],
        ),
        parameter(
            "Mean Cell Haemoglobin",
            FBC,
            "pg",
            vec![range(27.0, 32.0, "pg")],
            &["MCH"],
        ),
        parameter(
            "Neutrophils",
            FBC,
            "10^9/L",
            vec![range(2.0, 7.5, "10^9/L")],
            &["Neutrophil Count"],
        ),
        parameter(
            "Lymphocytes",
            FBC,
            "10^9/L",
            vec![range(1.0, 4.0, "10^9/L")],
            &["Lymphocyte Count"],
        ),
        parameter(
            "Monocytes",
            FBC,
            "10^9/L",
            vec![range(0.2, 1.0, "10^9/L")],
            &["Monocyte Count"],
        ),
        parameter(
            "Eosinophils",
            FBC,
            "10^9/L",
            vec![range(0.0, 0.4, "10^9/L")],
            &["Eosinophil Count"],
        ),
        parameter(
            "Basophils",
            FBC,
            "10^9/L",
            vec![range(0.0, 0.1, "10^9/L")],
            &["Basophil Count"],
        ),
        parameter(
            "Sodium",
            UE,
            "mmol/L",
            vec![range(133.0, 146.0, "mmol/L")],
            &["Na"],
        ),
        parameter(
            "Potassium",
            UE,
            "mmol/L",
            vec![range(3.5, 5.3, "mmol/L")],
            &["K"],
        ),
        parameter("Urea", UE, "mmol/L", vec![range(2.5, 7.8, "mmol/L")], &[]),
        parameter(
            "Creatinine",
            UE,
            "umol/L",
            vec![
                sex_range(59.0, 104.0, "umol/L", RangeSex::Male),
                sex_range(45.0, 84.0, "umol/L", RangeSex::Female),
            ],
            &["Creat"],
        ),
        parameter(
            "eGFR",
            UE,
            "mL/min/1.73m2",
            vec![range(60.0, 120.0, "mL/min/1.73m2")],
            &["Estimated GFR", "GFR"],
        ),
        parameter(
            "Urate",
            UE,
            "umol/L",
            vec![
                sex_range(200.0, 430.0, "umol/L", RangeSex::Male),
                sex_range(140.0, 360.0, "umol/L", RangeSex::Female),
            ],
            &["Uric Acid"],
        ),
        parameter(
            "Alanine Aminotransferase",
            LFT,
            "U/L",
            vec![
                sex_range(10.0, 50.0, "U/L", RangeSex::Male),
                sex_range(10.0, 35.0, "U/L", RangeSex::Female),
            ],
            &["ALT", "SGPT"],
        ),
        parameter(
            "Aspartate Aminotransferase",
            LFT,
            "U/L",
            vec![range(10.0, 40.0, "U/L")],
            &["AST", "SGOT"],
        ),
        parameter(
            "Alkaline Phosphatase",
            LFT,
            "U/L",
            vec![range(30.0, 130.0, "U/L")],
            &["ALP", "Alk Phos"],
        ),
        parameter(
            "Gamma GT",
            LFT,
            "U/L",
            vec![
                sex_range(10.0, 71.0, "U/L", RangeSex::Male),
                sex_range(6.0, 42.0, "U/L", RangeSex::Female),
            ],
            &["GGT", "Gamma-Glutamyl Transferase"],
        ),
        parameter(
            "Bilirubin",
            LFT,
            "umol/L",
            vec![range(0.0, 21.0, "umol/L")],
            &["Total Bilirubin", "TBIL"],
        ),
        parameter("Albumin", LFT, "g/L", vec![range(35.0, 50.0, "g/L")], &["Alb"]),
        parameter(
            "Total Protein",
            LFT,
            "g/L",
            vec![range(60.0, 80.0, "g/L")],
            &["TP"],
        ),
        parameter(
            "Calcium",
            BONE,
            "mmol/L",
            vec![range(2.20, 2.60, "mmol/L")],
            &["Ca", "Adjusted Calcium"],
        ),
        parameter(
            "Phosphate",
            BONE,
            "mmol/L",
            vec![range(0.80, 1.50, "mmol/L")],
            &["PO4"],
        ),
        parameter(
            "Magnesium",
            BONE,
            "mmol/L",
            vec![range(0.70, 1.00, "mmol/L")],
            &["Mg"],
        ),
        parameter(
            "C-Reactive Protein",
            INFLAMMATION,
            "mg/L",
            vec![range(0.0, 5.0, "mg/L")],
            &["CRP"],
        ),
        parameter(
            "Ferritin",
            HAEMATINICS,
            "ug/L",
            vec![
                sex_range(30.0, 400.0, "ug/L", RangeSex::Male),
                sex_range(15.0, 150.0, "ug/L", RangeSex::Female),
            ],
            &[],
        ),
        parameter(
            "Vitamin B12",
            HAEMATINICS,
            "ng/L",
            vec![range(197.0, 771.0, "ng/L")],
            &["B12", "Cobalamin"],
        ),
        parameter(
            "Folate",
            HAEMATINICS,
            "ug/L",
            vec![range(3.9, 26.8, "ug/L")],
            &["Serum Folate"],
        ),
        parameter(
            "Glucose",
            DIABETES,
            "mmol/L",
            vec![range(4.0, 7.8, "mmol/L")],
            &["Blood Glucose", "Random Glucose"],
        ),
        parameter(
            "HbA1c",
            DIABETES,
            "mmol/mol",
            vec![range(20.0, 41.0, "mmol/mol")],
            &["Glycated Haemoglobin", "A1c"],
        ),
        parameter(
            "Total Cholesterol",
            LIPIDS,
            "mmol/L",
            vec![range(0.0, 5.0, "mmol/L")],
            &["Cholesterol", "TC"],
        ),
        parameter(
            "Triglycerides",
            LIPIDS,
            "mmol/L",
            vec![range(0.0, 1.7, "mmol/L")],
            &["TG", "Trigs"],
        ),
        parameter(
            "HDL Cholesterol",
            LIPIDS,
            "mmol/L",
            vec![
                sex_range(1.0, 2.0, "mmol/L", RangeSex::Male),
                sex_range(1.2, 2.2, "mmol/L", RangeSex::Female),
            ],
            &["HDL"],
        ),
        parameter(
            "LDL Cholesterol",
            LIPIDS,
            "mmol/L",
            vec![range(0.0, 3.0, "mmol/L")],
            &["LDL"],
        ),
        parameter(
            "TSH",
            THYROID,
            "mU/L",
            vec![range(0.27, 4.2, "mU/L")],
            &["Thyroid Stimulating Hormone"],
        ),
        parameter(
            "Free T4",
            THYROID,
            "pmol/L",
            vec![range(12.0, 22.0, "pmol/L")],
            &["FT4", "Thyroxine"],
        ),
    ]
}
