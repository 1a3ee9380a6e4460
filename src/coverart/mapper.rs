//! Mapping layer: Convert archive listings into host image records
//!
//! This is the ONLY place where DTO types are converted to the host's
//! image taxonomy. Pure functions, no I/O.

use super::dto;
use crate::model::{ImageSlot, RatingType, RemoteImageInfo};
use crate::provider::PROVIDER_NAME;

/// Map a release listing onto host image slots.
///
/// Per image: a Front tag emits Box and then Primary (two records, same
/// payload), Back emits BoxRear, Medium emits Disc. Images carrying none
/// of those tags have no slot in the host taxonomy and are dropped.
/// Output order follows the archive's image order.
pub fn map_release(release: &dto::ReleaseDto) -> Vec<RemoteImageInfo> {
    let mut list = Vec::new();

    for image in &release.images {
        if image.types.contains(&dto::ImageType::Front) {
            list.push(to_remote_image(image, ImageSlot::Box));
            list.push(to_remote_image(image, ImageSlot::Primary));
        }
        if image.types.contains(&dto::ImageType::Back) {
            list.push(to_remote_image(image, ImageSlot::BoxRear));
        }
        if image.types.contains(&dto::ImageType::Medium) {
            list.push(to_remote_image(image, ImageSlot::Disc));
        }
    }

    list
}

fn to_remote_image(image: &dto::ImageDto, slot: ImageSlot) -> RemoteImageInfo {
    RemoteImageInfo {
        provider_name: PROVIDER_NAME,
        url: image.image.clone(),
        image_type: slot,
        thumbnail_url: choose_thumbnail(image),
        community_rating: if image.approved { 1.0 } else { 0.0 },
        rating_type: RatingType::Score,
    }
}

/// Small thumbnail preferred, large as fallback.
fn choose_thumbnail(image: &dto::ImageDto) -> Option<String> {
    let thumbs = image.thumbnails.as_ref()?;
    thumbs.small.clone().or_else(|| thumbs.large.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coverart::dto::{ImageDto, ImageType, ReleaseDto, ThumbnailsDto};
    use proptest::prelude::*;

    fn image(types: Vec<ImageType>, approved: bool) -> ImageDto {
        ImageDto {
            types,
            front: false,
            back: false,
            image: "http://example.com/full.jpg".to_string(),
            thumbnails: Some(ThumbnailsDto {
                small: Some("http://example.com/small.jpg".to_string()),
                large: Some("http://example.com/large.jpg".to_string()),
            }),
            comment: None,
            approved,
        }
    }

    fn release(images: Vec<ImageDto>) -> ReleaseDto {
        ReleaseDto {
            release: Some("https://musicbrainz.org/release/abc".to_string()),
            images,
        }
    }

    #[test]
    fn test_front_emits_box_then_primary() {
        let mapped = map_release(&release(vec![image(vec![ImageType::Front], true)]));

        assert_eq!(mapped.len(), 2);
        assert_eq!(mapped[0].image_type, ImageSlot::Box);
        assert_eq!(mapped[1].image_type, ImageSlot::Primary);
        assert_eq!(mapped[0].url, mapped[1].url);
        assert_eq!(mapped[0].thumbnail_url, mapped[1].thumbnail_url);
        assert_eq!(mapped[0].community_rating, mapped[1].community_rating);
    }

    #[test]
    fn test_back_emits_box_rear() {
        let mapped = map_release(&release(vec![image(vec![ImageType::Back], true)]));

        assert_eq!(mapped.len(), 1);
        assert_eq!(mapped[0].image_type, ImageSlot::BoxRear);
    }

    #[test]
    fn test_medium_emits_disc() {
        let mapped = map_release(&release(vec![image(vec![ImageType::Medium], true)]));

        assert_eq!(mapped.len(), 1);
        assert_eq!(mapped[0].image_type, ImageSlot::Disc);
    }

    #[test]
    fn test_unmapped_tags_are_dropped() {
        let mapped = map_release(&release(vec![
            image(vec![ImageType::Booklet], true),
            image(vec![ImageType::Obi, ImageType::Spine], true),
            image(vec![], true),
        ]));

        assert!(mapped.is_empty());
    }

    #[test]
    fn test_thumbnail_prefers_small() {
        let mapped = map_release(&release(vec![image(vec![ImageType::Back], true)]));
        assert_eq!(
            mapped[0].thumbnail_url.as_deref(),
            Some("http://example.com/small.jpg")
        );
    }

    #[test]
    fn test_thumbnail_falls_back_to_large() {
        let mut img = image(vec![ImageType::Back], true);
        img.thumbnails = Some(ThumbnailsDto {
            small: None,
            large: Some("http://example.com/large.jpg".to_string()),
        });

        let mapped = map_release(&release(vec![img]));
        assert_eq!(
            mapped[0].thumbnail_url.as_deref(),
            Some("http://example.com/large.jpg")
        );
    }

    #[test]
    fn test_thumbnail_absent_when_none_offered() {
        let mut img = image(vec![ImageType::Back], true);
        img.thumbnails = Some(ThumbnailsDto::default());
        let mapped = map_release(&release(vec![img]));
        assert_eq!(mapped[0].thumbnail_url, None);

        let mut img = image(vec![ImageType::Back], true);
        img.thumbnails = None;
        let mapped = map_release(&release(vec![img]));
        assert_eq!(mapped[0].thumbnail_url, None);
    }

    #[test]
    fn test_rating_from_approval() {
        let approved = map_release(&release(vec![image(vec![ImageType::Medium], true)]));
        assert_eq!(approved[0].community_rating, 1.0);
        assert_eq!(approved[0].rating_type, RatingType::Score);

        let unapproved = map_release(&release(vec![image(vec![ImageType::Medium], false)]));
        assert_eq!(unapproved[0].community_rating, 0.0);
        assert_eq!(unapproved[0].rating_type, RatingType::Score);
    }

    #[test]
    fn test_emission_follows_input_order() {
        let mapped = map_release(&release(vec![
            image(vec![ImageType::Medium], true),
            image(vec![ImageType::Front], true),
            image(vec![ImageType::Back], true),
        ]));

        let slots: Vec<_> = mapped.iter().map(|m| m.image_type).collect();
        assert_eq!(
            slots,
            vec![
                ImageSlot::Disc,
                ImageSlot::Box,
                ImageSlot::Primary,
                ImageSlot::BoxRear
            ]
        );
    }

    #[test]
    fn test_provider_name_constant() {
        let mapped = map_release(&release(vec![image(vec![ImageType::Front], true)]));
        assert!(mapped.iter().all(|m| m.provider_name == "Cover Art Archive"));
    }

    fn arb_image_type() -> impl Strategy<Value = ImageType> {
        prop_oneof![
            Just(ImageType::Front),
            Just(ImageType::Back),
            Just(ImageType::Booklet),
            Just(ImageType::Medium),
            Just(ImageType::Tray),
            Just(ImageType::Spine),
            Just(ImageType::Other),
        ]
    }

    proptest! {
        /// One image yields at most 4 records (Front counts double), and
        /// every record carries the shared payload.
        #[test]
        fn prop_mapped_count_bounded(types in prop::collection::vec(arb_image_type(), 0..5),
                                     approved in any::<bool>()) {
            let mapped = map_release(&release(vec![image(types.clone(), approved)]));

            let mut expected = 0;
            if types.contains(&ImageType::Front) { expected += 2; }
            if types.contains(&ImageType::Back) { expected += 1; }
            if types.contains(&ImageType::Medium) { expected += 1; }

            prop_assert_eq!(mapped.len(), expected);
            let rating = if approved { 1.0 } else { 0.0 };
            for m in &mapped {
                prop_assert_eq!(m.url.as_str(), "http://example.com/full.jpg");
                prop_assert_eq!(m.community_rating, rating);
            }
        }
    }
}
