//! Per-element test templates, dispatched on the element's base type name.

use crate::core::{GuiFramework, UiElementRecord};
use crate::generators::builder::{snake_case, PROBE_TEXT};

/// Families of UI controls that get a generated interaction test.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ElementKind {
    Button,
    TextInput,
    Checkbox,
    Radio,
    Combo,
}

/// Classify an element's base type name. Unrecognized types get no test.
pub(crate) fn element_kind(base_type: &str) -> Option<ElementKind> {
    match base_type {
        "Button" | "QPushButton" => Some(ElementKind::Button),
        "Entry" | "QLineEdit" | "TextInput" | "TextCtrl" => Some(ElementKind::TextInput),
        "Checkbutton" | "QCheckBox" | "CheckBox" => Some(ElementKind::Checkbox),
        "Radiobutton" | "QRadioButton" | "RadioButton" => Some(ElementKind::Radio),
        "Combobox" | "QComboBox" | "ComboBox" | "Spinner" => Some(ElementKind::Combo),
        _ => None,
    }
}

/// Render the test for one UI element. Returns an empty string when the
/// element type or framework has no template; the caller skips those.
pub(crate) fn render_element_test(
    framework: Option<GuiFramework>,
    class_name: &str,
    fixture: &str,
    element: &UiElementRecord,
) -> String {
    let Some(kind) = element_kind(element.base_type()) else {
        return String::new();
    };
    let Some(framework) = framework else {
        return String::new();
    };

    let test_name = format!(
        "test_{}_{}",
        snake_case(class_name),
        snake_case(&element.name)
    );

    match kind {
        ElementKind::Button => button_test(framework, &test_name, fixture, element),
        ElementKind::TextInput => text_input_test(framework, &test_name, fixture, element),
        ElementKind::Checkbox => checkbox_test(framework, &test_name, fixture, element),
        ElementKind::Radio => radio_test(framework, &test_name, fixture, element),
        ElementKind::Combo => combo_test(framework, &test_name, fixture, element),
    }
}

fn button_test(
    framework: GuiFramework,
    test_name: &str,
    fixture: &str,
    element: &UiElementRecord,
) -> String {
    let name = &element.name;
    match framework {
        GuiFramework::Tkinter => format!(
            r#"def {test_name}({fixture}):
    """Test that the {name} button works correctly."""
    button = {fixture}.{name}
    assert button is not None
    assert str(button['state']) in ('normal', 'active')
    # Invoking may raise if the button has no command attached
    try:
        button.invoke()
        if hasattr({fixture}, 'process_events'):
            {fixture}.process_events()
    except Exception:
        pass
"#
        ),
        GuiFramework::Pyqt | GuiFramework::Pyside => format!(
            r#"def {test_name}({fixture}):
    """Test that the {name} button works correctly."""
    button = {fixture}.{name}
    assert button is not None
    assert button.isEnabled()
    # Clicking may fail if the button has no slot connected
    try:
        QTest.mouseClick(button, Qt.LeftButton)
    except Exception:
        pass
"#
        ),
        _ => String::new(),
    }
}

fn text_input_test(
    framework: GuiFramework,
    test_name: &str,
    fixture: &str,
    element: &UiElementRecord,
) -> String {
    let name = &element.name;
    match framework {
        GuiFramework::Tkinter => {
            if element.base_type() == "Entry" {
                format!(
                    r#"def {test_name}({fixture}):
    """Test that the {name} input field works correctly."""
    entry = {fixture}.{name}
    assert entry is not None
    assert str(entry['state']) in ('normal', 'active')
    entry.delete(0, tk.END)
    entry.insert(0, "{PROBE_TEXT}")
    assert entry.get() == "{PROBE_TEXT}"
"#
                )
            } else {
                format!(
                    r#"def {test_name}({fixture}):
    """Test that the {name} text widget works correctly."""
    text = {fixture}.{name}
    assert text is not None
    assert str(text['state']) in ('normal', 'active')
    text.delete(1.0, tk.END)
    text.insert(1.0, "{PROBE_TEXT}")
    assert text.get(1.0, tk.END).strip() == "{PROBE_TEXT}"
"#
                )
            }
        }
        GuiFramework::Pyqt | GuiFramework::Pyside => {
            if element.base_type() == "QLineEdit" {
                format!(
                    r#"def {test_name}({fixture}):
    """Test that the {name} input field works correctly."""
    line_edit = {fixture}.{name}
    assert line_edit is not None
    assert line_edit.isEnabled()
    line_edit.clear()
    line_edit.setText("{PROBE_TEXT}")
    assert line_edit.text() == "{PROBE_TEXT}"
"#
                )
            } else {
                format!(
                    r#"def {test_name}({fixture}):
    """Test that the {name} text area works correctly."""
    text_edit = {fixture}.{name}
    assert text_edit is not None
    assert text_edit.isEnabled()
    text_edit.clear()
    text_edit.setText("{PROBE_TEXT}")
    assert text_edit.toPlainText() == "{PROBE_TEXT}"
"#
                )
            }
        }
        _ => String::new(),
    }
}

fn checkbox_test(
    framework: GuiFramework,
    test_name: &str,
    fixture: &str,
    element: &UiElementRecord,
) -> String {
    let name = &element.name;
    match framework {
        GuiFramework::Tkinter => format!(
            r#"def {test_name}({fixture}):
    """Test that the {name} checkbox works correctly."""
    checkbox = {fixture}.{name}
    assert checkbox is not None
    assert str(checkbox['state']) in ('normal', 'active')
    var = checkbox.cget('variable')
    initial_value = var.get() if var else 0
    checkbox.invoke()
    new_value = var.get() if var else 0
    assert new_value != initial_value
"#
        ),
        GuiFramework::Pyqt | GuiFramework::Pyside => format!(
            r#"def {test_name}({fixture}):
    """Test that the {name} checkbox works correctly."""
    checkbox = {fixture}.{name}
    assert checkbox is not None
    assert checkbox.isEnabled()
    initial_state = checkbox.isChecked()
    checkbox.setChecked(not initial_state)
    assert checkbox.isChecked() != initial_state
"#
        ),
        _ => String::new(),
    }
}

fn radio_test(
    framework: GuiFramework,
    test_name: &str,
    fixture: &str,
    element: &UiElementRecord,
) -> String {
    let name = &element.name;
    match framework {
        GuiFramework::Tkinter => format!(
            r#"def {test_name}({fixture}):
    """Test that the {name} radio button works correctly."""
    radio = {fixture}.{name}
    assert radio is not None
    assert str(radio['state']) in ('normal', 'active')
    radio.invoke()
    var = radio.cget('variable')
    if var:
        assert var.get() == radio.cget('value')
"#
        ),
        GuiFramework::Pyqt | GuiFramework::Pyside => format!(
            r#"def {test_name}({fixture}):
    """Test that the {name} radio button works correctly."""
    radio = {fixture}.{name}
    assert radio is not None
    assert radio.isEnabled()
    radio.setChecked(True)
    assert radio.isChecked()
"#
        ),
        _ => String::new(),
    }
}

fn combo_test(
    framework: GuiFramework,
    test_name: &str,
    fixture: &str,
    element: &UiElementRecord,
) -> String {
    let name = &element.name;
    match framework {
        GuiFramework::Tkinter => format!(
            r#"def {test_name}({fixture}):
    """Test that the {name} combobox works correctly."""
    combo = {fixture}.{name}
    assert combo is not None
    assert str(combo['state']) in ('normal', 'readonly', 'active')
    values = combo['values']
    if values and len(values) > 0:
        combo.current(0)
        assert combo.get() == values[0]
"#
        ),
        GuiFramework::Pyqt | GuiFramework::Pyside => format!(
            r#"def {test_name}({fixture}):
    """Test that the {name} combobox works correctly."""
    combo = {fixture}.{name}
    assert combo is not None
    assert combo.isEnabled()
    if combo.count() > 0:
        combo.setCurrentIndex(0)
        assert combo.currentIndex() == 0
"#
        ),
        _ => String::new(),
    }
}
