//! JSON-driven batch driver
//!
//! A script is a JSON array of step objects. The driver keeps nine cube
//! list slots, slot 0 being the primary accumulator, and executes the
//! steps in order. Each step may carry
//!
//! | key      | meaning                                              |
//! |----------|------------------------------------------------------|
//! | `cmd`    | one of the commands below                            |
//! | `slot`   | slot argument, default 0, out of range coerced to 0  |
//! | `bcl`    | cube list as a string or an array of cube strings    |
//! | `expr`   | boolean expression, alternative to `bcl`             |
//! | `label`  | append a result object under this key                |
//! | `label0` | like `label`, additionally rendering slot 0          |
//!
//! Commands: `bcl2slot`, `show`, `intersection0`, `subtract0`,
//! `equal0`, `exchange0`, `copy0`. The arithmetic commands set an
//! `empty` flag, `equal0` sets `superset` and `subset` flags (equal iff
//! both). A labelled step appends `{index, flags...}` to the output
//! object, and with `label0` also the slot 0 cube rows plus an
//! expression rendering when variable names are known. The driver
//! writes one JSON object for the whole run.
//!
//! The context is sized in a pre-scan over all steps: expressions are
//! parsed and their identifiers interned, cube strings are measured,
//! and the variable count is the larger of the two.

mod error;

pub use error::ScriptError;

use crate::context::{get_var_cnt_from_string, Context};
use crate::expr::{parse_expr, Expr, NameTable};
use crate::list::List;
use serde_json::{json, Map, Value};

/// Number of cube list slots.
pub const SLOT_CNT: usize = 9;

/// Parse and run a JSON script, returning the output object.
pub fn run_script(input: &str) -> Result<Value, ScriptError> {
    let doc: Value = serde_json::from_str(input)?;
    run_steps(&doc)
}

/// Run an already parsed step array, returning the output object.
pub fn run_steps(doc: &Value) -> Result<Value, ScriptError> {
    let steps = doc.as_array().ok_or(ScriptError::NotAnArray)?;

    // pre-scan: parse expressions, intern identifiers, measure cubes
    let mut names = NameTable::default();
    let mut width = 0usize;
    let mut exprs: Vec<Option<Expr>> = Vec::with_capacity(steps.len());
    for (idx, step) in steps.iter().enumerate() {
        let mut parsed = None;
        if let Some(obj) = step.as_object() {
            match obj.get("bcl") {
                Some(Value::String(s)) => width = width.max(get_var_cnt_from_string(s)),
                Some(Value::Array(rows)) => {
                    for row in rows {
                        if let Value::String(s) = row {
                            width = width.max(get_var_cnt_from_string(s));
                        }
                    }
                }
                _ => {}
            }
            if let Some(Value::String(text)) = obj.get("expr") {
                match parse_expr(text) {
                    Ok(expr) => {
                        expr.collect_idents(&mut names);
                        parsed = Some(expr);
                    }
                    Err(err) => eprintln!("step {}: expression error: {}", idx, err),
                }
            }
        }
        exprs.push(parsed);
    }

    let mut ctx = Context::new(width.max(names.len()));
    *ctx.names_mut() = names;
    let mut slots: Vec<List> = (0..SLOT_CNT).map(|_| ctx.new_list()).collect();
    let mut out = Map::new();

    for (idx, step) in steps.iter().enumerate() {
        let Some(obj) = step.as_object() else {
            eprintln!("step {}: not an object, skipped", idx);
            continue;
        };

        let slot = obj
            .get("slot")
            .and_then(Value::as_u64)
            .map(|n| n as usize)
            .filter(|&n| n < SLOT_CNT)
            .unwrap_or(0);

        // operand: explicit bcl, else expr, else the addressed slot
        let mut operand: Option<List> = None;
        match obj.get("bcl") {
            Some(Value::String(s)) => {
                let mut l = ctx.new_list();
                ctx.add_cubes_from_string(&mut l, s)?;
                operand = Some(l);
            }
            Some(Value::Array(rows)) => {
                let mut l = ctx.new_list();
                for row in rows {
                    if let Value::String(s) = row {
                        ctx.add_cubes_from_string(&mut l, s)?;
                    }
                }
                operand = Some(l);
            }
            _ => {}
        }
        if operand.is_none() {
            if let Some(expr) = &exprs[idx] {
                operand = Some(ctx.eval_expr(expr)?);
            }
        }

        let mut empty_flag = None;
        let mut superset_flag = None;
        let mut subset_flag = None;

        match obj.get("cmd").and_then(Value::as_str) {
            Some("bcl2slot") => match operand.take() {
                Some(l) => slots[slot] = l,
                None => eprintln!("step {}: bcl2slot without bcl or expr, skipped", idx),
            },
            Some("show") => {
                let arg = operand.as_ref().unwrap_or(&slots[slot]);
                ctx.show_list(arg);
            }
            Some("intersection0") => {
                let arg = operand.take().unwrap_or_else(|| slots[slot].clone());
                ctx.intersection_in_place(&mut slots[0], &arg)?;
                empty_flag = Some(slots[0].is_empty());
            }
            Some("subtract0") => {
                let arg = operand.take().unwrap_or_else(|| slots[slot].clone());
                ctx.subtract(&mut slots[0], &arg, true)?;
                empty_flag = Some(slots[0].is_empty());
            }
            Some("equal0") => {
                let arg = operand.take().unwrap_or_else(|| slots[slot].clone());
                superset_flag = Some(ctx.is_subset(&slots[0], &arg)?);
                subset_flag = Some(ctx.is_subset(&arg, &slots[0])?);
            }
            Some("exchange0") => slots.swap(0, slot),
            Some("copy0") => {
                let copy = slots[0].clone();
                slots[slot] = copy;
            }
            Some(other) => eprintln!("step {}: unknown command {:?}, skipped", idx, other),
            None => eprintln!("step {}: missing \"cmd\", skipped", idx),
        }

        let label = obj.get("label").and_then(Value::as_str);
        let label0 = obj.get("label0").and_then(Value::as_str);
        if label.is_some() || label0.is_some() {
            let mut entry = Map::new();
            entry.insert("index".to_string(), json!(idx));
            if let Some(empty) = empty_flag {
                entry.insert("empty".to_string(), json!(empty as u8));
            }
            if let Some(superset) = superset_flag {
                entry.insert("superset".to_string(), json!(superset as u8));
            }
            if let Some(subset) = subset_flag {
                entry.insert("subset".to_string(), json!(subset as u8));
            }
            if label0.is_some() {
                entry.insert("bcl".to_string(), json!(ctx.list_strings(&slots[0])));
                if !ctx.names().is_empty() {
                    entry.insert("expr".to_string(), json!(ctx.list_to_expr_string(&slots[0])));
                }
            }
            let key = label0.or(label).unwrap_or_default().to_string();
            out.insert(key, Value::Object(entry));
        }
    }

    Ok(Value::Object(out))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal0_flags() {
        let out = run_script(
            r#"[
                {"cmd":"bcl2slot","bcl":["1-","-1"],"slot":0},
                {"cmd":"bcl2slot","bcl":["11"],"slot":1},
                {"cmd":"equal0","slot":1,"label":"eq"}
            ]"#,
        )
        .unwrap();
        assert_eq!(out["eq"]["index"], json!(2));
        assert_eq!(out["eq"]["superset"], json!(1));
        assert_eq!(out["eq"]["subset"], json!(0));
    }

    #[test]
    fn test_intersection_and_empty_flag() {
        let out = run_script(
            r#"[
                {"cmd":"bcl2slot","bcl":"1-"},
                {"cmd":"intersection0","bcl":"-1","label":"step1"},
                {"cmd":"intersection0","bcl":"0-","label0":"step2"}
            ]"#,
        )
        .unwrap();
        assert_eq!(out["step1"]["empty"], json!(0));
        assert_eq!(out["step2"]["empty"], json!(1));
        assert_eq!(out["step2"]["bcl"], json!(Vec::<String>::new()));
    }

    #[test]
    fn test_subtract_to_empty() {
        let out = run_script(
            r#"[
                {"cmd":"bcl2slot","bcl":["10","01"]},
                {"cmd":"subtract0","bcl":["1-","-1"],"label":"diff"}
            ]"#,
        )
        .unwrap();
        assert_eq!(out["diff"]["empty"], json!(1));
    }

    #[test]
    fn test_label0_renders_cubes_and_expression() {
        let out = run_script(
            r#"[
                {"cmd":"bcl2slot","expr":"a&b | !a&c"},
                {"cmd":"copy0","slot":1,"label0":"result"}
            ]"#,
        )
        .unwrap();
        assert_eq!(out["result"]["bcl"], json!(["11-", "0-1"]));
        assert_eq!(out["result"]["expr"], json!("a&b|!a&c"));
    }

    #[test]
    fn test_exchange_and_copy() {
        let out = run_script(
            r#"[
                {"cmd":"bcl2slot","bcl":"11"},
                {"cmd":"bcl2slot","bcl":"00","slot":1},
                {"cmd":"exchange0","slot":1},
                {"cmd":"equal0","bcl":"00","label":"swapped"}
            ]"#,
        )
        .unwrap();
        assert_eq!(out["swapped"]["superset"], json!(1));
        assert_eq!(out["swapped"]["subset"], json!(1));
    }

    #[test]
    fn test_unknown_command_still_emits_label() {
        let out = run_script(r#"[{"cmd":"frobnicate","label":"x"}]"#).unwrap();
        assert_eq!(out["x"]["index"], json!(0));
        assert_eq!(out["x"].get("empty"), None);
    }

    #[test]
    fn test_out_of_range_slot_coerces_to_zero() {
        let out = run_script(
            r#"[
                {"cmd":"bcl2slot","bcl":"1-","slot":99},
                {"cmd":"equal0","bcl":"1-","label":"eq"}
            ]"#,
        )
        .unwrap();
        assert_eq!(out["eq"]["superset"], json!(1));
        assert_eq!(out["eq"]["subset"], json!(1));
    }

    #[test]
    fn test_arithmetic_on_empty_slot_sets_empty_flag() {
        let out = run_script(r#"[{"cmd":"intersection0","bcl":"1-","label":"e"}]"#).unwrap();
        assert_eq!(out["e"]["empty"], json!(1));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(matches!(run_script("[{"), Err(ScriptError::Json(_))));
        assert!(matches!(
            run_script(r#"{"cmd":"show"}"#),
            Err(ScriptError::NotAnArray)
        ));
    }

    #[test]
    fn test_mixed_expr_and_bcl_widths() {
        // two identifiers and a three-column bcl: the context takes the max
        let out = run_script(
            r#"[
                {"cmd":"bcl2slot","bcl":"11-"},
                {"cmd":"intersection0","expr":"a&b","label0":"r"}
            ]"#,
        )
        .unwrap();
        assert_eq!(out["r"]["empty"], json!(0));
        assert_eq!(out["r"]["bcl"], json!(["11-"]));
    }
}
