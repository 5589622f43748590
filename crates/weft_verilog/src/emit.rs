//! Rendering a validated chip as a Verilog module.
//!
//! Every net becomes a handshake triple of [`DATA_WIDTH`]-bit signals: data,
//! strobe, and acknowledge. Boundary nets declare their triple as module
//! ports (the acknowledge runs against the data direction), internal nets as
//! wires. Instances are connected positionally, one triple per bound net.

use std::fmt::{self, Write};

use weft_netlist::naming::handshake_signals;
use weft_netlist::{Chip, Net, NetKind};

use crate::error::ElaborateError;

/// Width in bits of every data, strobe, and acknowledge signal.
pub const DATA_WIDTH: u32 = 16;

/// Validates `chip` and renders it as one Verilog module.
///
/// # Errors
///
/// [`ElaborateError::IncompleteNetGraph`] with every violation if any net is
/// missing a driver or load. No text is produced in that case.
pub fn elaborate(chip: &Chip) -> Result<String, ElaborateError> {
    let _span = tracing::info_span!("elaborate", chip = %chip.name()).entered();

    chip.validate()
        .map_err(|violations| ElaborateError::IncompleteNetGraph {
            chip: chip.name().to_string(),
            violations,
        })?;

    let mut text = String::new();
    emit_module(chip, &mut text)?;
    tracing::info!(
        nets = chip.net_count(),
        instances = chip.instance_count(),
        bytes = text.len(),
        "elaborated"
    );
    Ok(text)
}

/// Writes the module text of `chip` to `out` without validating it.
///
/// Unbound slots are not visible in the output, so callers should go through
/// [`elaborate`] unless the chip is known to be valid.
pub fn emit_module<W: Write>(chip: &Chip, out: &mut W) -> fmt::Result {
    let ports: Vec<String> = chip
        .nets_of_kind(NetKind::BoundaryInput)
        .chain(chip.nets_of_kind(NetKind::BoundaryOutput))
        .flat_map(|net| handshake_signals(chip.net_name(net.id())))
        .collect();

    if ports.is_empty() {
        writeln!(out, "module {};", chip.name())?;
    } else {
        writeln!(out, "module {}(", chip.name())?;
        write_list(out, "  ", &ports)?;
        writeln!(out, ");")?;
    }

    for kind in [
        NetKind::BoundaryInput,
        NetKind::BoundaryOutput,
        NetKind::Internal,
    ] {
        for net in chip.nets_of_kind(kind) {
            declare_triple(chip, net, out)?;
        }
    }

    for instance in chip.instances() {
        let component = &instance.descriptor().name;
        let name = chip.instance_name(instance.id());
        let connections: Vec<String> = instance
            .connections()
            .flat_map(|net| handshake_signals(chip.net_name(net)))
            .collect();
        if connections.is_empty() {
            writeln!(out, "  {component} {name}();")?;
        } else {
            writeln!(out, "  {component} {name}(")?;
            write_list(out, "    ", &connections)?;
            writeln!(out, "  );")?;
        }
    }

    writeln!(out, "endmodule")
}

fn declare_triple<W: Write>(chip: &Chip, net: &Net, out: &mut W) -> fmt::Result {
    let keywords = match net.kind() {
        NetKind::BoundaryInput => ["input", "input", "output"],
        NetKind::BoundaryOutput => ["output", "output", "input"],
        NetKind::Internal => ["wire", "wire", "wire"],
    };
    let msb = DATA_WIDTH - 1;
    for (keyword, signal) in keywords.iter().zip(handshake_signals(chip.net_name(net.id()))) {
        writeln!(out, "  {keyword:<6} [{msb}:0] {signal};")?;
    }
    Ok(())
}

/// One item per line, comma-separated.
fn write_list<W: Write>(out: &mut W, indent: &str, items: &[String]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        let sep = if i + 1 < items.len() { "," } else { "" };
        writeln!(out, "{indent}{item}{sep}")?;
    }
    Ok(())
}
