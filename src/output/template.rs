// Fri Oct 16 2026 - Alex

//! Text fragments of a generated trampoline file.
//!
//! The storage cell of a symbol is named `__<symbol>__`. The stub refers to
//! the cell by that name, so [`cell_name`] is the single source of it.

pub const PAYLOAD_HEADER: &str = "payload.h";
pub const PAYLOAD_ARGS_TYPE: &str = "payload_args_t";
pub const DLSYM_MEMBER: &str = "sceKernelDlsym";

/// Constructor priority of the generated resolver. Must run after the most
/// critical platform startup step, before general module code executes.
pub const LOADER_CONSTRUCTOR_PRIORITY: u32 = 102;

pub fn cell_name(symbol: &str) -> String {
    format!("__{}__", symbol)
}

pub fn include(header: &str) -> String {
    format!("#include \"{}\"\n\n", header)
}

/// Pointer cell plus an exported stub that jumps through it.
pub fn trampoline(symbol: &str) -> String {
    let cell = cell_name(symbol);
    let mut code = String::new();

    code.push_str(&format!("static __attribute__ ((used)) void* {} = 0;\n", cell));
    code.push_str("asm(\n");
    code.push_str("    \".intel_syntax noprefix\\n\"\n");
    code.push_str(&format!("    \".global {}\\n\"\n", symbol));
    code.push_str(&format!("    \"{}:\\n\"\n", symbol));
    code.push_str(&format!("    \"jmp qword ptr [rip + {}]\\n\");\n", cell));
    code.push('\n');

    code
}

pub fn constructor_name(stem: &str) -> String {
    format!("{}_dlsym", sanitize_c_name(stem))
}

pub fn constructor_open(stem: &str) -> String {
    let mut code = String::new();

    code.push_str(&format!(
        "__attribute__((constructor({}))) static int\n",
        LOADER_CONSTRUCTOR_PRIORITY
    ));
    code.push_str(&format!(
        "{}(const {} *args) {{\n",
        constructor_name(stem),
        PAYLOAD_ARGS_TYPE
    ));
    code.push_str("  int err = 0;\n");

    code
}

pub fn lookup_call(module_id: &str, symbol: &str) -> String {
    format!(
        "  if((err=args->{}({}, \"{}\", &{}))) return err;\n",
        DLSYM_MEMBER,
        module_id,
        symbol,
        cell_name(symbol)
    )
}

pub fn constructor_close() -> String {
    "\n  return 0;\n}\n".to_string()
}

fn sanitize_c_name(name: &str) -> String {
    let result: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();

    if result.chars().next().map(|c| c.is_ascii_digit()).unwrap_or(true) {
        format!("_{}", result)
    } else {
        result
    }
}
