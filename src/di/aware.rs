//! Capability injection for resolved services.
//!
//! Each row pairs a marker probe with the contract it delivers. The table is
//! closed: adding a capability means adding a marker trait, a probe on
//! [`crate::core::traits::Aware`] and a row here.

use super::{Service, ServiceContainer};
use crate::core::errors::Result;
use crate::core::traits::Aware;

struct AwareContract {
    capability: &'static str,
    apply: fn(&dyn Aware, &mut ServiceContainer) -> Result<bool>,
}

const AWARE_CONTRACTS: &[AwareContract] = &[
    AwareContract {
        capability: "config",
        apply: apply_config,
    },
    AwareContract {
        capability: "class_factory",
        apply: apply_class_factory,
    },
    AwareContract {
        capability: "documentation_factory",
        apply: apply_documentation_factory,
    },
    AwareContract {
        capability: "import_factory",
        apply: apply_import_factory,
    },
    AwareContract {
        capability: "method_factory",
        apply: apply_method_factory,
    },
    AwareContract {
        capability: "mock_generator",
        apply: apply_mock_generator,
    },
    AwareContract {
        capability: "property_factory",
        apply: apply_property_factory,
    },
    AwareContract {
        capability: "statement_factory",
        apply: apply_statement_factory,
    },
    AwareContract {
        capability: "test_generator",
        apply: apply_test_generator,
    },
    AwareContract {
        capability: "value_factory",
        apply: apply_value_factory,
    },
];

/// Deliver every capability the service asks for.
///
/// Targets resolve through the container, so injection can construct
/// services of its own; the caller has already cached the receiving service.
pub(super) fn inject(container: &mut ServiceContainer, service: &Service) -> Result<()> {
    for entry in AWARE_CONTRACTS {
        if (entry.apply)(service.as_aware(), container)? {
            log::trace!(
                "injected {} into {} service",
                entry.capability,
                service.contract()
            );
        }
    }
    Ok(())
}

fn apply_config(aware: &dyn Aware, container: &mut ServiceContainer) -> Result<bool> {
    let Some(target) = aware.as_config_aware() else {
        return Ok(false);
    };
    target.set_config(container.resolved_config()?);
    Ok(true)
}

fn apply_class_factory(aware: &dyn Aware, container: &mut ServiceContainer) -> Result<bool> {
    let Some(target) = aware.as_class_factory_aware() else {
        return Ok(false);
    };
    target.set_class_factory(container.class_factory()?);
    Ok(true)
}

fn apply_documentation_factory(
    aware: &dyn Aware,
    container: &mut ServiceContainer,
) -> Result<bool> {
    let Some(target) = aware.as_documentation_factory_aware() else {
        return Ok(false);
    };
    target.set_documentation_factory(container.documentation_factory()?);
    Ok(true)
}

fn apply_import_factory(aware: &dyn Aware, container: &mut ServiceContainer) -> Result<bool> {
    let Some(target) = aware.as_import_factory_aware() else {
        return Ok(false);
    };
    target.set_import_factory(container.import_factory()?);
    Ok(true)
}

fn apply_method_factory(aware: &dyn Aware, container: &mut ServiceContainer) -> Result<bool> {
    let Some(target) = aware.as_method_factory_aware() else {
        return Ok(false);
    };
    target.set_method_factory(container.method_factory()?);
    Ok(true)
}

fn apply_mock_generator(aware: &dyn Aware, container: &mut ServiceContainer) -> Result<bool> {
    let Some(target) = aware.as_mock_generator_aware() else {
        return Ok(false);
    };
    target.set_mock_generator(container.mock_generator()?);
    Ok(true)
}

fn apply_property_factory(aware: &dyn Aware, container: &mut ServiceContainer) -> Result<bool> {
    let Some(target) = aware.as_property_factory_aware() else {
        return Ok(false);
    };
    target.set_property_factory(container.property_factory()?);
    Ok(true)
}

fn apply_statement_factory(aware: &dyn Aware, container: &mut ServiceContainer) -> Result<bool> {
    let Some(target) = aware.as_statement_factory_aware() else {
        return Ok(false);
    };
    target.set_statement_factory(container.statement_factory()?);
    Ok(true)
}

fn apply_test_generator(aware: &dyn Aware, container: &mut ServiceContainer) -> Result<bool> {
    let Some(target) = aware.as_test_generator_aware() else {
        return Ok(false);
    };
    target.set_test_generator(container.test_generator()?);
    Ok(true)
}

fn apply_value_factory(aware: &dyn Aware, container: &mut ServiceContainer) -> Result<bool> {
    let Some(target) = aware.as_value_factory_aware() else {
        return Ok(false);
    };
    target.set_value_factory(container.value_factory()?);
    Ok(true)
}
