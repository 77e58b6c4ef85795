use serde::{Deserialize, Serialize};

#[derive(PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize, Debug)]
pub enum Nation {
    Roman,
    Egyptian,
    Asian,
    Amazon,
}

impl Nation {
    pub const fn name(&self) -> &'static str {
        match self {
            Nation::Roman => "Roman",
            Nation::Egyptian => "Egyptian",
            Nation::Asian => "Asian",
            Nation::Amazon => "Amazon",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Nation;
    use crate::legacy_codec::decode_nation;

    #[test]
    fn test_name_of_decoded_nation() {
        let names: Vec<_> = (0..4)
            .filter_map(|code| decode_nation(code).known())
            .map(|nation| nation.name())
            .collect();
        assert_eq!(names, ["Roman", "Egyptian", "Asian", "Amazon"]);
        assert_eq!(Nation::Amazon.name(), "Amazon");
    }
}
