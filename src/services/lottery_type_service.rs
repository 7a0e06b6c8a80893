use crate::entities::lottery_type_entity as lottery_types;
use crate::error::{AppError, AppResult};
use crate::models::{CreateLotteryTypeRequest, LotteryTypeResponse};
use crate::services::PunterService;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

#[derive(Clone)]
pub struct LotteryTypeService {
    pool: DatabaseConnection,
    punter_service: PunterService,
}

impl LotteryTypeService {
    pub fn new(pool: DatabaseConnection, punter_service: PunterService) -> Self {
        Self {
            pool,
            punter_service,
        }
    }

    /// Create a lottery type (admin only). The configuration invariants are
    /// enforced here, at creation time; draw resolution assumes them.
    pub async fn create(
        &self,
        acting_punter_id: i64,
        request: CreateLotteryTypeRequest,
    ) -> AppResult<LotteryTypeResponse> {
        self.punter_service.ensure_admin(acting_punter_id).await?;
        validate_config(&request)?;

        let model = lottery_types::ActiveModel {
            name: Set(request.name.trim().to_string()),
            number_of_numbers: Set(request.number_of_numbers as i32),
            max_val: Set(request.max_val as i32),
            min_matches: Set(request.min_matches as i32),
            rollover: Set(Decimal::ZERO),
            spotprize_min_matches: Set(request.spotprize_min_matches.map(|v| v as i32)),
            spotprize_value: Set(request.spotprize_value),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        log::info!("Created lottery type {} ({})", model.id, model.name);
        Ok(model.into())
    }

    pub async fn list(&self, acting_punter_id: i64) -> AppResult<Vec<LotteryTypeResponse>> {
        self.punter_service.ensure_admin(acting_punter_id).await?;
        let list = lottery_types::Entity::find()
            .order_by_asc(lottery_types::Column::Id)
            .all(&self.pool)
            .await?;
        Ok(list.into_iter().map(Into::into).collect())
    }
}

fn validate_config(request: &CreateLotteryTypeRequest) -> AppResult<()> {
    if request.name.trim().is_empty() {
        return Err(AppError::ValidationError("Name is required".to_string()));
    }
    if request.number_of_numbers < 1 {
        return Err(AppError::ValidationError(
            "number_of_numbers must be at least 1".to_string(),
        ));
    }
    // cannot pick more distinct numbers than exist in 1..=max_val
    if request.number_of_numbers > request.max_val {
        return Err(AppError::ValidationError(
            "number_of_numbers cannot exceed max_val".to_string(),
        ));
    }
    if request.min_matches < 1 || request.min_matches > request.number_of_numbers {
        return Err(AppError::ValidationError(
            "min_matches must be between 1 and number_of_numbers".to_string(),
        ));
    }
    match (request.spotprize_min_matches, request.spotprize_value) {
        (None, None) => {}
        (Some(min), Some(value)) => {
            if min < 1 || min > request.number_of_numbers {
                return Err(AppError::ValidationError(
                    "spotprize_min_matches must be between 1 and number_of_numbers".to_string(),
                ));
            }
            if value <= Decimal::ZERO {
                return Err(AppError::ValidationError(
                    "spotprize_value must be positive".to_string(),
                ));
            }
        }
        _ => {
            return Err(AppError::ValidationError(
                "spotprize_min_matches and spotprize_value must be set together".to_string(),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn request() -> CreateLotteryTypeRequest {
        CreateLotteryTypeRequest {
            name: "Test Lottery".to_string(),
            number_of_numbers: 3,
            max_val: 5,
            min_matches: 1,
            spotprize_min_matches: None,
            spotprize_value: None,
        }
    }

    #[test]
    fn test_valid_configs() {
        assert!(validate_config(&request()).is_ok());
        let mut extended = request();
        extended.spotprize_min_matches = Some(1);
        extended.spotprize_value = Some(dec!(10.00));
        assert!(validate_config(&extended).is_ok());
    }

    #[test]
    fn test_more_numbers_than_range_rejected() {
        let mut r = request();
        r.number_of_numbers = 6;
        r.max_val = 5;
        assert!(validate_config(&r).is_err());
    }

    #[test]
    fn test_min_matches_bounds() {
        let mut r = request();
        r.min_matches = 0;
        assert!(validate_config(&r).is_err());
        r.min_matches = 4;
        assert!(validate_config(&r).is_err());
    }

    #[test]
    fn test_spot_prize_fields_must_come_together() {
        let mut r = request();
        r.spotprize_min_matches = Some(1);
        assert!(validate_config(&r).is_err());
        r.spotprize_min_matches = None;
        r.spotprize_value = Some(dec!(10.00));
        assert!(validate_config(&r).is_err());
    }

    #[test]
    fn test_spot_prize_value_must_be_positive() {
        let mut r = request();
        r.spotprize_min_matches = Some(1);
        r.spotprize_value = Some(dec!(0.00));
        assert!(validate_config(&r).is_err());
    }
}
