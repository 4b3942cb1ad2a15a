use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Идентификатор товара из таблицы (колонка `id`).
///
/// Дробная часть отбрасывается при разборе: `1.5` и `1.7` дают один и тот же
/// id `1`, и избранное их не различает.
pub type ProductId = i64;

/// Одна строка опубликованной таблицы товаров.
///
/// Запись неизменяема после разбора; избранное хранит копии записей,
/// поэтому изменения цены в таблице не попадают в уже сохранённое избранное.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductRecord {
    #[serde(default)]
    pub id: ProductId,

    /// Свободный тег категории, сравнивается с учётом регистра
    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub price: f64,

    /// URL картинки товара
    #[serde(default)]
    pub image: String,

    /// Дополнительные колонки таблицы; при отрисовке не используются
    #[serde(flatten, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
}

impl ProductRecord {
    pub fn new(
        id: ProductId,
        category: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id,
            category: category.into(),
            name: name.into(),
            price,
            image: image.into(),
            extra: BTreeMap::new(),
        }
    }
}

/// Минимальный каталог на случай, если таблица не загрузилась.
pub fn fallback_catalog(image: &str) -> Vec<ProductRecord> {
    vec![
        ProductRecord::new(1, "whiteboard", "Standard White Board", 3500.0, image),
        ProductRecord::new(2, "greenboard", "Green Chalk Board", 4500.0, image),
    ]
}
