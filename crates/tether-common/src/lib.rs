pub mod definition;
pub mod protocol;

pub use definition::{
    AttachmentDefinition, DeclarationDefinition, DefinitionError, NestedDefinition, StepDefinition,
};
pub use protocol::{
    Alignment, ArrowOption, ArrowSettings, FloatingUiOverrides, NamedMiddleware, Placement,
    PositioningOptions, Strategy,
};
