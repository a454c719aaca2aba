use crate::backend::domain::commands::profiles::{
    AgeResult, BirthdayResult, CreateProfileCommand, UpdateProfileCommand,
};
use crate::backend::domain::age::BirthdayProximity;
use crate::backend::domain::models::profile::{
    Gender as DomainGender, UserProfile, Website as DomainWebsite,
};
use shared::{
    AgeBreakdown, AgeResponse, BirthdayInfo, BirthdayResponse, CreateProfileRequest,
    Gender as SharedGender, Profile as SharedProfile, ProfileListResponse, ProfileResponse,
    UpdateProfileRequest, Website as SharedWebsite,
};

/// Mapper to convert between shared profile DTOs and domain models.
pub struct ProfileMapper;

impl ProfileMapper {
    pub fn to_create_command(request: CreateProfileRequest) -> CreateProfileCommand {
        CreateProfileCommand {
            username: request.username,
            first_name: request.first_name,
            middle_names: request.middle_names,
            last_name: request.last_name,
            email: request.email,
            national_id: request.national_id,
            gender: request
                .gender
                .map(Self::gender_to_domain)
                .unwrap_or_default(),
            address: request.address,
            postal_code: request.postal_code,
            phone: request.phone,
            mobile: request.mobile,
            homepages: request
                .homepages
                .into_iter()
                .map(Self::website_to_domain)
                .collect(),
        }
    }

    pub fn to_update_command(username: &str, request: UpdateProfileRequest) -> UpdateProfileCommand {
        UpdateProfileCommand {
            username: username.to_string(),
            first_name: request.first_name,
            middle_names: request.middle_names,
            last_name: request.last_name,
            email: request.email,
            national_id: request.national_id,
            gender: request.gender.map(Self::gender_to_domain),
            address: request.address,
            postal_code: request.postal_code,
            phone: request.phone,
            mobile: request.mobile,
            homepages: request
                .homepages
                .map(|sites| sites.into_iter().map(Self::website_to_domain).collect()),
        }
    }

    /// Converts a domain profile to the shared DTO.
    pub fn to_dto(domain: UserProfile) -> SharedProfile {
        let national_id = domain.formatted_national_id();
        let short_full_name = domain.short_full_name();
        SharedProfile {
            id: domain.id,
            username: domain.username,
            first_name: domain.first_name,
            middle_names: domain.middle_names,
            last_name: domain.last_name,
            email: domain.email,
            national_id,
            gender: Self::gender_to_dto(domain.gender),
            address: domain.address,
            postal_code: domain.postal_code,
            phone: domain.phone,
            mobile: domain.mobile,
            homepages: domain
                .homepages
                .into_iter()
                .map(Self::website_to_dto)
                .collect(),
            short_full_name,
            created_at: domain.created_at.to_rfc3339(),
            updated_at: domain.updated_at.to_rfc3339(),
        }
    }

    pub fn to_profile_response_dto(domain: UserProfile, message: &str) -> ProfileResponse {
        ProfileResponse {
            profile: Self::to_dto(domain),
            success_message: message.to_string(),
        }
    }

    pub fn to_profile_list_dto(profiles: Vec<UserProfile>) -> ProfileListResponse {
        ProfileListResponse {
            profiles: profiles.into_iter().map(Self::to_dto).collect(),
        }
    }

    pub fn to_age_dto(result: AgeResult) -> AgeResponse {
        AgeResponse {
            age: result.age.map(|computed| AgeBreakdown {
                years: computed.delta.years,
                months: computed.delta.months,
                days: computed.delta.days,
                birth_date: computed.birth_date.format("%Y-%m-%d").to_string(),
            }),
        }
    }

    pub fn to_birthday_dto(result: BirthdayResult) -> BirthdayResponse {
        BirthdayResponse {
            birthday: result.birthday.map(|computed| {
                let (proximity, months, days) = match computed.proximity {
                    BirthdayProximity::Today => ("today", 0, 0),
                    BirthdayProximity::Upcoming { months, days } => ("upcoming", months, days),
                    BirthdayProximity::Past { months, days } => ("past", months, days),
                };
                BirthdayInfo {
                    closest_birthday: computed.closest_birthday.format("%Y-%m-%d").to_string(),
                    proximity: proximity.to_string(),
                    months,
                    days,
                    label: computed.proximity.label(),
                }
            }),
        }
    }

    fn gender_to_domain(gender: SharedGender) -> DomainGender {
        match gender {
            SharedGender::Male => DomainGender::Male,
            SharedGender::Female => DomainGender::Female,
            SharedGender::Unspecified => DomainGender::Unspecified,
        }
    }

    fn gender_to_dto(gender: DomainGender) -> SharedGender {
        match gender {
            DomainGender::Male => SharedGender::Male,
            DomainGender::Female => SharedGender::Female,
            DomainGender::Unspecified => SharedGender::Unspecified,
        }
    }

    fn website_to_domain(site: SharedWebsite) -> DomainWebsite {
        DomainWebsite {
            url: site.url,
            name: site.name,
        }
    }

    fn website_to_dto(site: DomainWebsite) -> SharedWebsite {
        SharedWebsite {
            url: site.url,
            name: site.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::age::AgeDelta;
    use crate::backend::domain::commands::profiles::{ComputedAge, ComputedBirthday};
    use chrono::NaiveDate;

    #[test]
    fn test_birthday_dto_upcoming() {
        let result = BirthdayResult {
            birthday: Some(ComputedBirthday {
                closest_birthday: NaiveDate::from_ymd_opt(2008, 10, 22).unwrap(),
                proximity: BirthdayProximity::Upcoming { months: 2, days: 5 },
            }),
        };
        let dto = ProfileMapper::to_birthday_dto(result);
        let info = dto.birthday.unwrap();
        assert_eq!(info.closest_birthday, "2008-10-22");
        assert_eq!(info.proximity, "upcoming");
        assert_eq!((info.months, info.days), (2, 5));
        assert_eq!(info.label, "has a birthday in 2 months and 5 days");
    }

    #[test]
    fn test_age_dto_absent_without_national_id() {
        let dto = ProfileMapper::to_age_dto(AgeResult { age: None });
        assert!(dto.age.is_none());
    }

    #[test]
    fn test_age_dto_breakdown() {
        let result = AgeResult {
            age: Some(ComputedAge {
                birth_date: NaiveDate::from_ymd_opt(1987, 10, 22).unwrap(),
                delta: AgeDelta {
                    years: 20,
                    months: 11,
                    days: 11,
                },
            }),
        };
        let dto = ProfileMapper::to_age_dto(result);
        let age = dto.age.unwrap();
        assert_eq!((age.years, age.months, age.days), (20, 11, 11));
        assert_eq!(age.birth_date, "1987-10-22");
    }
}
