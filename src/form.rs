//! Console form for collecting customer data.
//!
//! One `CustomerRecord` per invocation. Numeric prompts are range-bounded
//! and re-ask until the answer parses, the console analog of a bounded
//! widget; an empty answer takes the field's default.

use crate::types::customer::{
    CustomerRecord, Education, Feedback, Gender, MaritalStatus, MonthlyIncome, Occupation,
};
use anyhow::{bail, Result};
use std::io::{BufRead, Write};

/// Collect one customer record from the form prompts.
pub fn collect_record<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<CustomerRecord> {
    writeln!(output)?;
    writeln!(output, "Customer details (press Enter to keep a default):")?;

    let age = prompt_i32(input, output, "Age", 18, 60, 25)?;
    let gender = prompt_choice(input, output, "Gender", &Gender::ALL, |g| g.label(), 0)?;
    let marital_status = prompt_choice(
        input,
        output,
        "Marital status",
        &MaritalStatus::ALL,
        |m| m.label(),
        0,
    )?;
    let occupation = prompt_choice(
        input,
        output,
        "Occupation",
        &Occupation::ALL,
        |o| o.label(),
        0,
    )?;
    let monthly_income = prompt_choice(
        input,
        output,
        "Monthly income",
        &MonthlyIncome::ALL,
        |i| i.label(),
        0,
    )?;
    let education = prompt_choice(
        input,
        output,
        "Educational qualification",
        &Education::ALL,
        |e| e.label(),
        0,
    )?;
    let family_size = prompt_i32(input, output, "Family size", 1, 10, 3)?;
    let latitude = prompt_f64(input, output, "Latitude", 12.97)?;
    let longitude = prompt_f64(input, output, "Longitude", 77.59)?;
    let pin_code = prompt_text(input, output, "Pin code", "560001")?;
    let feedback = prompt_choice(
        input,
        output,
        "Previous feedback",
        &Feedback::ALL,
        |f| f.label(),
        0,
    )?;

    Ok(CustomerRecord {
        age,
        gender,
        marital_status,
        occupation,
        monthly_income,
        education,
        family_size,
        latitude,
        longitude,
        pin_code,
        feedback,
    })
}

/// Print a prompt and read one trimmed answer.
fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<String> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("input closed before the form was complete");
    }
    Ok(line.trim().to_string())
}

fn prompt_i32<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
    min: i32,
    max: i32,
    default: i32,
) -> Result<i32> {
    loop {
        let answer = prompt_line(
            input,
            output,
            &format!("{} [{}-{}, default {}]: ", label, min, max, default),
        )?;
        if answer.is_empty() {
            return Ok(default);
        }
        match answer.parse::<i32>() {
            Ok(value) if (min..=max).contains(&value) => return Ok(value),
            _ => writeln!(output, "Enter a whole number between {} and {}.", min, max)?,
        }
    }
}

fn prompt_f64<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
    default: f64,
) -> Result<f64> {
    loop {
        let answer = prompt_line(
            input,
            output,
            &format!("{} [default {:.4}]: ", label, default),
        )?;
        if answer.is_empty() {
            return Ok(default);
        }
        match answer.parse::<f64>() {
            Ok(value) => return Ok(value),
            Err(_) => writeln!(output, "Enter a number.")?,
        }
    }
}

fn prompt_text<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
    default: &str,
) -> Result<String> {
    let answer = prompt_line(input, output, &format!("{} [default {}]: ", label, default))?;
    if answer.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(answer)
    }
}

fn prompt_choice<T: Copy, R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
    options: &[T],
    display: impl Fn(&T) -> &str,
    default: usize,
) -> Result<T> {
    loop {
        writeln!(output, "{}:", label)?;
        for (index, option) in options.iter().enumerate() {
            writeln!(output, "  {}. {}", index + 1, display(option))?;
        }
        let answer = prompt_line(input, output, &format!("Choice [default {}]: ", default + 1))?;
        if answer.is_empty() {
            return Ok(options[default]);
        }
        match answer.parse::<usize>() {
            Ok(n) if (1..=options.len()).contains(&n) => return Ok(options[n - 1]),
            _ => writeln!(output, "Enter a number between 1 and {}.", options.len())?,
        }
    }
}
