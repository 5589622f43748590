//! Signal naming rules shared by netlist construction and emission.
//!
//! Every net is emitted as a handshake triple: the data signal carries the
//! net's own name, and the strobe and acknowledge signals append
//! [`STROBE_SUFFIX`] and [`ACK_SUFFIX`].

use crate::error::NetlistError;

/// Suffix of the strobe (data valid) signal of a handshake triple.
pub const STROBE_SUFFIX: &str = "_stb";

/// Suffix of the acknowledge signal of a handshake triple.
pub const ACK_SUFFIX: &str = "_ack";

/// Prefix of automatically named internal nets.
pub const WIRE_PREFIX: &str = "wire";

/// Prefix of instance names.
pub const INSTANCE_PREFIX: &str = "inst";

/// Verilog-2005 reserved words that cannot name a signal.
const KEYWORDS: &[&str] = &[
    "always", "and", "assign", "automatic", "begin", "buf", "case", "casex", "casez", "cell",
    "config", "deassign", "default", "defparam", "design", "disable", "edge", "else", "end",
    "endcase", "endconfig", "endfunction", "endgenerate", "endmodule", "endprimitive",
    "endspecify", "endtable", "endtask", "event", "for", "force", "forever", "fork", "function",
    "generate", "genvar", "if", "ifnone", "incdir", "include", "initial", "inout", "input",
    "instance", "integer", "join", "liblist", "library", "localparam", "macromodule", "module",
    "nand", "negedge", "nor", "not", "or", "output", "parameter", "posedge", "reg", "release",
    "repeat", "signed", "specify", "specparam", "supply0", "supply1", "table", "task", "time",
    "tri", "tri0", "tri1", "triand", "trior", "unsigned", "use", "wait", "wand", "while", "wire",
    "wor", "xnor", "xor",
];

/// The data, strobe, and acknowledge signal names of the net called `base`.
pub fn handshake_signals(base: &str) -> [String; 3] {
    [
        base.to_string(),
        format!("{base}{STROBE_SUFFIX}"),
        format!("{base}{ACK_SUFFIX}"),
    ]
}

/// Checks that `name` can be emitted as a plain Verilog identifier.
pub fn check_identifier(name: &str) -> Result<(), NetlistError> {
    let invalid = |reason: &str| NetlistError::InvalidName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    let mut chars = name.chars();
    match chars.next() {
        None => return Err(invalid("name is empty")),
        Some(c) if !(c.is_ascii_alphabetic() || c == '_') => {
            return Err(invalid("must start with a letter or underscore"))
        }
        Some(_) => {}
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(invalid("may only contain letters, digits, and underscores"));
    }
    if KEYWORDS.contains(&name) {
        return Err(invalid("is a Verilog keyword"));
    }
    Ok(())
}

/// Returns `base`, or `base_1`, `base_2`, ... : the first candidate for which
/// `is_free` holds.
pub(crate) fn first_free(base: &str, mut is_free: impl FnMut(&str) -> bool) -> String {
    if is_free(base) {
        return base.to_string();
    }
    (1u32..)
        .map(|n| format!("{base}_{n}"))
        .find(|candidate| is_free(candidate))
        .unwrap_or_else(|| base.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handshake_suffixes() {
        assert_eq!(handshake_signals("sum"), ["sum", "sum_stb", "sum_ack"]);
    }

    #[test]
    fn accepts_plain_identifiers() {
        for name in ["a", "sum", "_tmp", "wire_12", "A1b2"] {
            assert!(check_identifier(name).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn rejects_bad_identifiers() {
        for name in ["", "1a", "a-b", "a b", "$x", "a.b"] {
            assert!(
                matches!(check_identifier(name), Err(NetlistError::InvalidName { .. })),
                "{name:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_keywords() {
        let err = check_identifier("input").unwrap_err();
        assert_eq!(err.to_string(), "`input` is not a valid signal name: is a Verilog keyword");
        assert!(check_identifier("inputs").is_ok());
    }

    #[test]
    fn first_free_appends_suffix() {
        let taken = ["wire_0", "wire_0_1"];
        let name = first_free("wire_0", |c| !taken.contains(&c));
        assert_eq!(name, "wire_0_2");
        assert_eq!(first_free("wire_3", |_| true), "wire_3");
    }
}
