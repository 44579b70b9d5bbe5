//! Java Swing source generation from a component list.
//!
//! The designer's placeholder widgets map one to one onto Swing classes and
//! are laid out with absolute positioning, so the emitted form reproduces the
//! canvas exactly.

use crate::component::{PlacedComponent, Rgb, WidgetKind};
use std::fmt::Write;

impl WidgetKind {
    /// The Swing class a placed component compiles to.
    pub fn swing_class(self) -> &'static str {
        match self {
            WidgetKind::Button => "JButton",
            WidgetKind::Label => "JLabel",
            WidgetKind::TextField => "JTextField",
            WidgetKind::CheckBox => "JCheckBox",
            WidgetKind::Panel => "JPanel",
            WidgetKind::ComboBox => "JComboBox",
            WidgetKind::List => "JList",
            WidgetKind::TextArea => "JTextArea",
        }
    }
}

/// Field name for the i-th component: the Swing class without its `J`
/// prefix, lowercased, plus a 1-based index.
fn field_name(kind: WidgetKind, index: usize) -> String {
    let base = kind.swing_class().trim_start_matches('J').to_lowercase();
    format!("{base}{}", index + 1)
}

/// Generate a complete Java Swing source file for the given components.
///
/// Properties still at their design-time defaults are omitted, so the output
/// stays close to what a developer would write by hand.
pub fn generate_form_source(components: &[PlacedComponent], class_name: &str) -> String {
    let mut out = String::new();

    out.push_str("import javax.swing.*;\n");
    out.push_str("import java.awt.*;\n");
    out.push_str("import java.awt.event.*;\n\n");

    let _ = writeln!(out, "public class {class_name} extends JFrame {{");
    out.push_str("    // Component declarations\n");
    for (i, component) in components.iter().enumerate() {
        let _ = writeln!(
            out,
            "    private {} {};",
            component.kind.swing_class(),
            field_name(component.kind, i)
        );
    }

    let _ = writeln!(out, "\n    public {class_name}() {{");
    out.push_str("        initializeComponents();\n");
    out.push_str("        setupLayout();\n");
    out.push_str("        setupFrame();\n");
    out.push_str("    }\n\n");

    emit_initialize(&mut out, components);
    emit_layout(&mut out, components);
    emit_frame(&mut out, class_name);
    emit_main(&mut out, class_name);

    out.push_str("}\n");
    out
}

fn emit_initialize(out: &mut String, components: &[PlacedComponent]) {
    out.push_str("    private void initializeComponents() {\n");
    for (i, component) in components.iter().enumerate() {
        let name = field_name(component.kind, i);
        let _ = writeln!(
            out,
            "        {name} = new {}();",
            component.kind.swing_class()
        );
        emit_properties(out, component, &name);
        out.push('\n');
    }
    out.push_str("    }\n\n");
}

fn emit_properties(out: &mut String, component: &PlacedComponent, name: &str) {
    if !component.text.is_empty() {
        let _ = writeln!(out, "        {name}.setText(\"{}\");", component.text);
    }
    if !component.enabled {
        let _ = writeln!(out, "        {name}.setEnabled(false);");
    }
    if !component.visible {
        let _ = writeln!(out, "        {name}.setVisible(false);");
    }

    if component.kind == WidgetKind::TextField {
        if !component.editable {
            let _ = writeln!(out, "        {name}.setEditable(false);");
        }
        if component.columns != 10 {
            let _ = writeln!(out, "        {name}.setColumns({});", component.columns);
        }
    }
    if component.kind == WidgetKind::CheckBox && component.selected {
        let _ = writeln!(out, "        {name}.setSelected(true);");
    }

    // Both stock backgrounds read as "unset"; only explicit colors survive.
    let bg = component.background;
    if bg != Rgb::light_gray() && bg != Rgb::white() {
        let _ = writeln!(
            out,
            "        {name}.setBackground(new Color({}, {}, {}));",
            bg.r, bg.g, bg.b
        );
    }
    if component.kind == WidgetKind::Panel {
        let _ = writeln!(out, "        {name}.setOpaque(true);");
    }
}

fn emit_layout(out: &mut String, components: &[PlacedComponent]) {
    out.push_str("    private void setupLayout() {\n");
    out.push_str("        setLayout(null); // Using absolute positioning\n\n");
    for (i, component) in components.iter().enumerate() {
        let name = field_name(component.kind, i);
        let b = component.bounds;
        let _ = writeln!(
            out,
            "        {name}.setBounds({}, {}, {}, {});",
            b.x, b.y, b.width, b.height
        );
        let _ = writeln!(out, "        add({name});\n");
    }
    out.push_str("    }\n\n");
}

fn emit_frame(out: &mut String, class_name: &str) {
    out.push_str("    private void setupFrame() {\n");
    let _ = writeln!(out, "        setTitle(\"{class_name}\");");
    out.push_str("        setDefaultCloseOperation(JFrame.EXIT_ON_CLOSE);\n");
    out.push_str("        setSize(800, 600);\n");
    out.push_str("        setLocationRelativeTo(null);\n");
    out.push_str("    }\n\n");
}

fn emit_main(out: &mut String, class_name: &str) {
    out.push_str("    public static void main(String[] args) {\n");
    out.push_str("        SwingUtilities.invokeLater(() -> {\n");
    out.push_str("            try {\n");
    out.push_str(
        "                UIManager.setLookAndFeel(UIManager.getSystemLookAndFeel());\n",
    );
    out.push_str("            } catch (Exception e) {\n");
    out.push_str("                e.printStackTrace();\n");
    out.push_str("            }\n");
    let _ = writeln!(out, "            new {class_name}().setVisible(true);");
    out.push_str("        });\n");
    out.push_str("    }\n");
}
