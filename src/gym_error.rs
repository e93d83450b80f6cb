use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GymError {
    #[error("A barbell must weigh more than nothing.")]
    InvalidBarWeight,
    #[error("At least one plate denomination is required.")]
    EmptyInventory,
    #[error("Plates must weigh more than nothing.")]
    ZeroPlate,
    #[error("Plate {0} is listed more than once.")]
    DuplicatePlate(String),
    #[error("Invalid weight: {0:?}.")]
    InvalidWeight(String),
    #[error("Invalid repetitions: {0:?}.")]
    InvalidReps(String),
    #[error("Unknown exercise: {0:?}.")]
    UnknownExercise(String),
    #[error("Week must be between 1 and 6 or \"all\", got {0:?}.")]
    InvalidWeek(String),
    #[error("Weighted pull-ups need a body weight.")]
    MissingBodyWeight,
}
