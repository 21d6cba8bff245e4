//! The `ValidController` rule: concrete controller subclasses must be
//! re-instantiatable by the framework after process death.

use crate::lint::registry::VALID_CONTROLLER;
use crate::lint::{Anchor, Diagnostic};
use crate::model::{ClassDescriptor, ConstructorDescriptor};

/// Fully-qualified name of the framework's argument-bundle type.
const BUNDLE_CLASS: &str = "android.os.Bundle";
/// Unqualified spelling, as emitted by exporters that do not resolve imports.
const BUNDLE_SHORT: &str = "Bundle";

/// Decide whether `class` violates the rule.
///
/// Checks run in priority order and the first match wins, so a class failing
/// several conditions at once still gets a single diagnostic. Returns `None`
/// for abstract classes and classes outside the controller hierarchy.
pub fn check_instantiable(
    class: &ClassDescriptor,
    constructors: &[ConstructorDescriptor],
) -> Option<Diagnostic> {
    if class.is_abstract {
        return None;
    }

    if !class.extends_controller {
        return None;
    }

    if !class.is_public {
        return Some(at_class(
            class,
            format!(
                "This Controller class should be public ({})",
                class.qualified_name
            ),
        ));
    }

    if class.is_nested && !class.is_static {
        return Some(at_class(
            class,
            format!(
                "This Controller inner class should be static ({})",
                class.qualified_name
            ),
        ));
    }

    for constructor in constructors {
        if constructor.is_public
            && (constructor.param_types.is_empty() || takes_single_bundle(constructor))
        {
            return None;
        }
    }

    // No declared constructor means the implicit default constructor, which
    // is public and parameterless.
    constructors.first().map(|constructor| Diagnostic {
        rule: VALID_CONTROLLER.id,
        severity: VALID_CONTROLLER.severity,
        class_name: class.qualified_name.clone(),
        message: format!(
            "This Controller needs to have either a public default constructor or a \
             public single-argument constructor that takes a Bundle. ({})",
            class.qualified_name
        ),
        anchor: Anchor::Constructor,
        span: constructor.span,
    })
}

/// Matches by type name, not resolved identity: any single parameter spelled
/// `Bundle` or `android.os.Bundle` counts.
fn takes_single_bundle(constructor: &ConstructorDescriptor) -> bool {
    match constructor.param_types.as_slice() {
        [ty] => ty == BUNDLE_CLASS || ty == BUNDLE_SHORT,
        _ => false,
    }
}

fn at_class(class: &ClassDescriptor, message: String) -> Diagnostic {
    Diagnostic {
        rule: VALID_CONTROLLER.id,
        severity: VALID_CONTROLLER.severity,
        class_name: class.qualified_name.clone(),
        message,
        anchor: Anchor::Class,
        span: class.span,
    }
}
