use std::fs;

use alu_rs::Operation;
use alu_rs::utils::parse_operand;

/// A recorded computation: inputs, the expected flags and any step labels
/// that must match exactly.
///
/// Files are `key = value` lines; `#` starts a comment. Step labels use
/// `step.N = label` keys.
#[derive(Debug)]
pub struct Scenario {
    pub a: u8,
    pub b: u8,
    pub op: Operation,
    pub value: Option<u8>,
    pub zero: Option<bool>,
    pub negative: Option<bool>,
    pub carry: Option<bool>,
    pub overflow: Option<bool>,
    pub steps: Vec<(usize, String)>,
}

fn flag(val: &str) -> bool {
    match val {
        "1" | "true" => true,
        "0" | "false" => false,
        _ => panic!("Bad flag value: {}", val),
    }
}

impl Scenario {
    pub fn load(path: &str) -> Self {
        let text = fs::read_to_string(path).unwrap();
        let mut a = None;
        let mut b = 0;
        let mut op = None;
        let mut scenario = Scenario {
            a: 0,
            b: 0,
            op: Operation::Add,
            value: None,
            zero: None,
            negative: None,
            carry: None,
            overflow: None,
            steps: Vec::new(),
        };

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (key, val) = line
                .split_once('=')
                .unwrap_or_else(|| panic!("{}: expected key = value, got {:?}", path, line));
            let (key, val) = (key.trim(), val.trim());

            match key {
                "a" => a = Some(parse_operand(val).unwrap()),
                "b" => b = parse_operand(val).unwrap(),
                "op" => op = Some(val.parse::<Operation>().unwrap()),
                "value" => scenario.value = Some(parse_operand(val).unwrap()),
                "zero" => scenario.zero = Some(flag(val)),
                "negative" => scenario.negative = Some(flag(val)),
                "carry" => scenario.carry = Some(flag(val)),
                "overflow" => scenario.overflow = Some(flag(val)),
                _ => match key.strip_prefix("step.") {
                    Some(index) => scenario
                        .steps
                        .push((index.parse().unwrap(), val.to_string())),
                    None => panic!("{}: unknown key {}", path, key),
                },
            }
        }

        scenario.a = a.unwrap_or_else(|| panic!("{}: missing a", path));
        scenario.b = b;
        scenario.op = op.unwrap_or_else(|| panic!("{}: missing op", path));
        scenario
    }
}
