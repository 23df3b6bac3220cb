use crate::gateway::VideoEntity;

/// The editable fields of a video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Title,
    Description,
    Category,
    Visibility,
}

impl Field {
    pub const ALL: [Self; 4] = [Self::Title, Self::Description, Self::Category, Self::Visibility];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Category => "category",
            Self::Visibility => "visibility",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }
}

/// Draft values of the form. Serialized as is, it is the full update payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct EditBuffer {
    pub title: String,
    pub description: String,
    pub category: String,
    pub visibility: String,
}

impl EditBuffer {
    pub fn from_video(video: &VideoEntity) -> Self {
        Self {
            title: video.title.clone(),
            description: video.description.clone(),
            category: video.category.clone(),
            visibility: video.visibility.clone(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Description => &self.description,
            Field::Category => &self.category,
            Field::Visibility => &self.visibility,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Title => &mut self.title,
            Field::Description => &mut self.description,
            Field::Category => &mut self.category,
            Field::Visibility => &mut self.visibility,
        };

        *slot = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_round_trip() {
        for field in Field::ALL {
            assert_eq!(Field::from_name(field.name()), Some(field));
        }

        assert_eq!(Field::from_name("Category"), None);
        assert_eq!(Field::from_name("tags"), None);
    }

    #[test]
    fn setting_one_field_leaves_the_others_alone() {
        let mut buffer = EditBuffer {
            title: "Cats".to_owned(),
            description: "meow".to_owned(),
            category: "Pets".to_owned(),
            visibility: "Public".to_owned(),
        };

        buffer.set(Field::Title, "Dogs".to_owned());

        assert_eq!(buffer.get(Field::Title), "Dogs");
        assert_eq!(buffer.description, "meow");
        assert_eq!(buffer.category, "Pets");
        assert_eq!(buffer.visibility, "Public");
    }

    #[test]
    fn payload_contains_exactly_the_four_fields() {
        let buffer = EditBuffer {
            title: "Dogs".to_owned(),
            ..Default::default()
        };

        let json = serde_json::to_value(&buffer).unwrap();
        let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();

        assert_eq!(keys.len(), 4);
        assert_eq!(json["title"], "Dogs");
        assert_eq!(json["visibility"], "");
    }
}
