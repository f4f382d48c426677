use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{ArrayRef, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const ROWS: usize = 1000;

const GENDERS: [&str; 2] = ["female", "male"];
const GROUPS: [&str; 5] = ["group A", "group B", "group C", "group D", "group E"];
const EDUCATION: [&str; 6] = [
    "some high school",
    "high school",
    "some college",
    "associate's degree",
    "bachelor's degree",
    "master's degree",
];
const LUNCH: [&str; 2] = ["standard", "free/reduced"];
const PREP: [&str; 2] = ["none", "completed"];

const COLUMNS: [&str; 8] = [
    "gender",
    "race_ethnicity",
    "parental_level_of_education",
    "lunch",
    "test_preparation_course",
    "math_score",
    "reading_score",
    "writing_score",
];

#[derive(Debug, Clone, PartialEq)]
struct Student {
    gender: &'static str,
    group: &'static str,
    education: &'static str,
    lunch: &'static str,
    prep: &'static str,
    math: i64,
    reading: i64,
    writing: i64,
}

fn pick(rng: &mut StdRng, options: &[&'static str]) -> &'static str {
    options.choose(rng).copied().unwrap_or_default()
}

fn score(rng: &mut StdRng, base: f64) -> i64 {
    (base + rng.gen_range(-15.0..15.0)).round().clamp(0.0, 100.0) as i64
}

fn generate(rng: &mut StdRng) -> Vec<Student> {
    (0..ROWS)
        .map(|_| {
            let gender = pick(rng, &GENDERS);
            let lunch = pick(rng, &LUNCH);
            let prep = pick(rng, &PREP);

            // Standard lunch and a completed prep course both lift the baseline.
            let mut base = 60.0;
            if lunch == "standard" {
                base += 8.0;
            }
            if prep == "completed" {
                base += 6.0;
            }
            let verbal_bias = if gender == "female" { 4.0 } else { -2.0 };

            Student {
                gender,
                group: pick(rng, &GROUPS),
                education: pick(rng, &EDUCATION),
                lunch,
                prep,
                math: score(rng, base - verbal_bias),
                reading: score(rng, base + verbal_bias),
                writing: score(rng, base + verbal_bias),
            }
        })
        .collect()
}

fn write_csv(students: &[Student], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).context("creating output CSV")?;
    writer.write_record(COLUMNS)?;
    for s in students {
        writer.write_record([
            s.gender.to_string(),
            s.group.to_string(),
            s.education.to_string(),
            s.lunch.to_string(),
            s.prep.to_string(),
            s.math.to_string(),
            s.reading.to_string(),
            s.writing.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn write_parquet(students: &[Student], path: &Path) -> Result<()> {
    let text = |f: fn(&Student) -> &'static str| -> ArrayRef {
        Arc::new(StringArray::from(students.iter().map(f).collect::<Vec<_>>()))
    };
    let int = |f: fn(&Student) -> i64| -> ArrayRef {
        Arc::new(Int64Array::from(students.iter().map(f).collect::<Vec<_>>()))
    };

    let fields: Vec<Field> = COLUMNS
        .iter()
        .map(|&name| {
            let dtype = if name.ends_with("_score") {
                DataType::Int64
            } else {
                DataType::Utf8
            };
            Field::new(name, dtype, false)
        })
        .collect();
    let schema = Arc::new(Schema::new(fields));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            text(|s| s.gender),
            text(|s| s.group),
            text(|s| s.education),
            text(|s| s.lunch),
            text(|s| s.prep),
            int(|s| s.math),
            int(|s| s.reading),
            int(|s| s.writing),
        ],
    )
    .context("building record batch")?;

    let file = std::fs::File::create(path).context("creating output file")?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating parquet writer")?;
    writer.write(&batch).context("writing record batch")?;
    writer.close().context("closing parquet writer")?;
    Ok(())
}

fn main() -> Result<()> {
    let output_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| Path::new("notebook").join("data").join("stud.csv"));

    if let Some(dir) = output_path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating directory {}", dir.display()))?;
    }

    let mut rng = StdRng::seed_from_u64(42);
    let students = generate(&mut rng);

    let is_parquet = output_path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("parquet"));
    if is_parquet {
        write_parquet(&students, &output_path)?;
    } else {
        write_csv(&students, &output_path)?;
    }

    println!(
        "Wrote {} students ({} columns) to {}",
        students.len(),
        COLUMNS.len(),
        output_path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn same_seed_same_students() {
        let a = generate(&mut StdRng::seed_from_u64(42));
        let b = generate(&mut StdRng::seed_from_u64(42));
        assert_eq!(a.len(), ROWS);
        assert_eq!(a, b);
    }

    #[test]
    fn scores_stay_in_range() {
        let students = generate(&mut StdRng::seed_from_u64(42));
        for s in &students {
            for v in [s.math, s.reading, s.writing] {
                assert!((0..=100).contains(&v), "score {v} out of range");
            }
            assert!(GENDERS.contains(&s.gender));
            assert!(GROUPS.contains(&s.group));
        }
    }

    #[test]
    fn csv_has_every_column() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stud.csv");
        let students = generate(&mut StdRng::seed_from_u64(42));
        write_csv(&students, &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let header: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
        assert_eq!(header, COLUMNS);
        assert_eq!(reader.records().count(), ROWS);
    }
}
