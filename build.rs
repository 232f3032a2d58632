// build.rs
use serde::Deserialize;
use std::collections::HashSet;
use std::{env, fs, path::Path};

#[derive(Deserialize)]
struct FullJson {
    operations: Vec<RawOperation>,
}

#[derive(Deserialize)]
struct RawOperation {
    name: String,
    mnemonic: String,
    description: String,
    symbol: String,
    code: String,
    arity: u8,
}

fn generate_scenario_tests() {
    let out_dir = std::env::var("OUT_DIR").unwrap();
    let destination = Path::new(&out_dir).join("generated_scenario_tests.rs");

    let mut test_code = String::new();
    let scenarios = glob::glob("tests/scenarios/**/*.txt").expect("Failed to read glob pattern");

    for entry in scenarios.filter_map(Result::ok) {
        let path = entry.to_str().unwrap();
        let name = entry
            .to_str()
            .unwrap()
            .replace("/", "_")
            .replace("\\", "_")
            .replace(" ", "_")
            .replace("-", "_")
            .replace(".", "_")
            .replace("__", "_");

        // Reduce name length for simplicity.
        let name = name.strip_prefix("tests_scenarios_").unwrap_or(&name);

        test_code.push_str(&format!(
            "#[test] fn {}() {{ run_scenario(r#\"{}\"#); }}\n",
            name, path
        ));
    }

    fs::write(destination, test_code).unwrap();
}

fn control_code(op: &RawOperation) -> u8 {
    if op.code.len() != 3 {
        panic!(
            "Control code for {} must be three bits, got {:?}",
            op.mnemonic, op.code
        );
    }
    u8::from_str_radix(&op.code, 2).expect("Control code is not binary")
}

fn produce_operation_enum(ops: &[RawOperation]) -> String {
    let mut code = String::new();
    code.push_str("\n#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]\npub enum Operation {\n");
    for op in ops {
        code.push_str(&format!("    {},\n", op.name));
    }
    code.push_str("}\n");
    code
}

fn produce_operation_table(ops: &[RawOperation]) -> String {
    let mut code = String::new();
    code.push_str(&format!(
        "pub static OPERATIONS: [OperationInfo; {}] = [\n",
        ops.len()
    ));
    for op in ops {
        code.push_str(&format!(
            "    OperationInfo {{ operation: Operation::{}, mnemonic: {:?}, description: {:?}, symbol: {:?}, control_code: 0b{:03b}, arity: {} }},\n",
            op.name,
            op.mnemonic,
            op.description,
            op.symbol,
            control_code(op),
            op.arity
        ));
    }
    code.push_str("];\n\n");

    code.push_str("impl Operation {\n");
    code.push_str(&format!("    pub const ALL: [Operation; {}] = [", ops.len()));
    for op in ops {
        code.push_str(&format!("Operation::{}, ", op.name));
    }
    code.push_str("];\n}\n");
    code
}

fn produce_alu_coverage_trait(ops: &[RawOperation]) -> String {
    let mut code = String::new();
    code.push_str("pub trait Alu {\n");

    for op in ops {
        let args = match op.arity {
            1 => "a: u8",
            2 => "a: u8, b: u8",
            n => panic!("Unsupported arity {} for {}", n, op.mnemonic),
        };
        code.push_str(&format!(
            "    fn alu_{}({}) -> Self;\n",
            op.mnemonic.to_lowercase(),
            args
        ));
    }
    code.push_str("}\n");
    code
}

fn produce_dispatcher_fn(ops: &[RawOperation]) -> String {
    let mut code = String::new();
    code.push_str("impl Operation {\n");
    code.push_str("pub fn apply<T: Alu>(self, a: u8, b: u8) -> T {\n");
    code.push_str("match self {\n");

    for op in ops {
        let args = if op.arity == 1 { "a" } else { "a, b" };
        code.push_str(&format!(
            "Operation::{} => T::alu_{}({}),\n",
            op.name,
            op.mnemonic.to_lowercase(),
            args
        ));
    }
    code.push_str("}\n}\n}\n");
    code
}

fn main() {
    let json_str = fs::read_to_string("src/operations/data/operations.json")
        .expect("Missing operations.json");
    let data: FullJson = serde_json::from_str(&json_str).expect("JSON parse error");

    let mut seen_mnemonics = HashSet::new();
    let mut seen_codes = HashSet::new();
    for op in &data.operations {
        if !seen_mnemonics.insert(op.mnemonic.clone()) {
            panic!("Duplicate mnemonic in operations.json: {}", op.mnemonic);
        }
        if !seen_codes.insert(control_code(op)) {
            panic!("Duplicate control code in operations.json: {}", op.code);
        }
    }

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("operations_generated.rs");
    let mut code = String::new();

    code.push_str(&produce_operation_enum(&data.operations));
    code.push_str(&produce_operation_table(&data.operations));
    code.push_str(&produce_alu_coverage_trait(&data.operations));
    code.push_str(&produce_dispatcher_fn(&data.operations));

    fs::write(&dest_path, code).unwrap();

    generate_scenario_tests();
    println!("cargo:rerun-if-changed=src/operations/data/operations.json");
    println!("cargo:rerun-if-changed=tests/scenarios");
    println!("cargo:rerun-if-changed=build.rs");
}
