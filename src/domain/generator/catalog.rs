//! Word lists backing generated values
//!
//! Lookups walk a layer chain: the requested locale, then English, then a
//! locale-neutral base layer. The first layer with entries for a field wins.

use super::locale::Locale;

/// A named list of values a generator can draw from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FirstName,
    LastName,
    City,
    State,
    Country,
    StreetName,
    StreetSuffix,
    CompanySuffix,
    CatchPhraseAdjective,
    CatchPhraseDescriptor,
    CatchPhraseNoun,
    Department,
    ProductAdjective,
    ProductMaterial,
    ProductNoun,
    ProductDescription,
    FreeEmailDomain,
    DomainSuffix,
    LoremWord,
    UserAgent,
    TransactionType,
}

/// One step in a lookup chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Locale(Locale),
    Base,
}

/// Currency as `(code, name, symbol)`
pub type Currency = (&'static str, &'static str, &'static str);

pub const CURRENCIES: &[Currency] = &[
    ("USD", "US Dollar", "$"),
    ("EUR", "Euro", "€"),
    ("GBP", "Pound Sterling", "£"),
    ("JPY", "Yen", "¥"),
    ("CNY", "Yuan Renminbi", "¥"),
    ("BRL", "Brazilian Real", "R$"),
    ("CHF", "Swiss Franc", "CHF"),
    ("CAD", "Canadian Dollar", "$"),
    ("AUD", "Australian Dollar", "$"),
    ("INR", "Indian Rupee", "₹"),
];

/// The layers consulted for `locale`, most specific first
pub fn layers(locale: Locale) -> Vec<Layer> {
    let mut chain = vec![Layer::Locale(locale)];
    if locale != Locale::En {
        chain.push(Layer::Locale(Locale::En));
    }
    chain.push(Layer::Base);
    chain
}

/// First non-empty list for `field` along `chain`
pub fn lookup(chain: &[Layer], field: Field) -> &'static [&'static str] {
    chain
        .iter()
        .map(|layer| entries(*layer, field))
        .find(|list| !list.is_empty())
        .unwrap_or(&[])
}

fn entries(layer: Layer, field: Field) -> &'static [&'static str] {
    match layer {
        Layer::Locale(Locale::En) => english(field),
        Layer::Locale(Locale::De) => german(field),
        Layer::Locale(Locale::Es) => spanish(field),
        Layer::Locale(Locale::Fr) => french(field),
        Layer::Locale(Locale::It) => italian(field),
        Layer::Locale(Locale::Ja) => japanese(field),
        Layer::Locale(Locale::PtBr) => brazilian(field),
        Layer::Locale(Locale::ZhCn) => chinese(field),
        Layer::Base => base(field),
    }
}

fn english(field: Field) -> &'static [&'static str] {
    match field {
        Field::FirstName => &[
            "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda",
            "David", "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica",
            "Thomas", "Sarah", "Charles", "Karen", "Daniel", "Nancy", "Matthew", "Lisa",
        ],
        Field::LastName => &[
            "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
            "Rodriguez", "Martinez", "Hernandez", "Lopez", "Wilson", "Anderson", "Thomas",
            "Taylor", "Moore", "Jackson", "Martin", "Lee", "Thompson", "White", "Harris", "Clark",
        ],
        Field::City => &[
            "Springfield", "Riverside", "Fairview", "Franklin", "Greenville", "Bristol",
            "Clinton", "Georgetown", "Salem", "Madison", "Arlington", "Ashland", "Oxford",
            "Jackson", "Burlington", "Manchester",
        ],
        Field::State => &[
            "AL", "AK", "AZ", "CA", "CO", "CT", "FL", "GA", "IL", "MA", "MI", "MN", "NY", "OH",
            "OR", "PA", "TX", "VA", "WA", "WI",
        ],
        Field::Country => &[
            "United States", "Canada", "United Kingdom", "Australia", "Ireland", "New Zealand",
            "Germany", "France", "Spain", "Italy", "Japan", "Brazil", "China", "Mexico",
        ],
        Field::StreetName => &[
            "Maple", "Oak", "Pine", "Cedar", "Elm", "Washington", "Lake", "Hill", "Park",
            "Sunset", "Main", "Church", "Mill", "River", "Spring", "Highland",
        ],
        Field::StreetSuffix => &[
            "Street", "Avenue", "Road", "Lane", "Drive", "Court", "Way", "Boulevard", "Place",
        ],
        Field::CompanySuffix => &["Inc", "LLC", "Group", "and Sons", "Ltd"],
        Field::CatchPhraseAdjective => &[
            "Adaptive", "Balanced", "Centralized", "Configurable", "Customizable", "Distributed",
            "Enhanced", "Ergonomic", "Integrated", "Multi-layered", "Optimized", "Proactive",
            "Reactive", "Streamlined", "Synergized", "Versatile",
        ],
        Field::CatchPhraseDescriptor => &[
            "24/7", "asynchronous", "bottom-line", "client-driven", "dedicated", "dynamic",
            "fault-tolerant", "global", "heuristic", "interactive", "logistical", "modular",
            "real-time", "scalable", "transitional", "zero-defect",
        ],
        Field::CatchPhraseNoun => &[
            "ability", "algorithm", "architecture", "benchmark", "capacity", "circuit",
            "framework", "hierarchy", "infrastructure", "interface", "methodology", "middleware",
            "paradigm", "protocol", "solution", "throughput",
        ],
        Field::Department => &[
            "Books", "Movies", "Music", "Games", "Electronics", "Computers", "Home", "Garden",
            "Tools", "Grocery", "Health", "Beauty", "Toys", "Kids", "Sports", "Outdoors",
            "Clothing", "Shoes", "Jewelery", "Automotive",
        ],
        Field::ProductAdjective => &[
            "Small", "Ergonomic", "Rustic", "Intelligent", "Gorgeous", "Incredible", "Fantastic",
            "Practical", "Sleek", "Awesome", "Generic", "Handcrafted", "Handmade", "Licensed",
            "Refined", "Unbranded", "Tasty",
        ],
        Field::ProductMaterial => &[
            "Steel", "Wooden", "Concrete", "Plastic", "Cotton", "Granite", "Rubber", "Metal",
            "Soft", "Fresh", "Frozen", "Bronze", "Silk",
        ],
        Field::ProductNoun => &[
            "Chair", "Car", "Computer", "Keyboard", "Mouse", "Bike", "Ball", "Gloves", "Pants",
            "Shirt", "Table", "Shoes", "Hat", "Towels", "Soap", "Tuna", "Chicken", "Fish",
            "Cheese", "Bacon", "Pizza", "Salad", "Sausages", "Chips",
        ],
        Field::FreeEmailDomain => &["gmail.com", "yahoo.com", "hotmail.com"],
        Field::DomainSuffix => &["com", "net", "org", "info", "biz", "name"],
        _ => &[],
    }
}

fn german(field: Field) -> &'static [&'static str] {
    match field {
        Field::FirstName => &[
            "Lukas", "Leon", "Finn", "Jonas", "Paul", "Felix", "Emma", "Mia", "Hannah", "Sophia",
            "Lena", "Anna",
        ],
        Field::LastName => &[
            "Müller", "Schmidt", "Schneider", "Fischer", "Weber", "Meyer", "Wagner", "Becker",
            "Schulz", "Hoffmann",
        ],
        Field::City => &[
            "Berlin", "Hamburg", "München", "Köln", "Frankfurt", "Stuttgart", "Düsseldorf",
            "Leipzig", "Dresden", "Bremen",
        ],
        Field::Country => &["Deutschland", "Österreich", "Schweiz", "Frankreich", "Italien"],
        Field::StreetName => &["Haupt", "Schul", "Garten", "Bahnhof", "Dorf", "Berg", "Linden"],
        Field::StreetSuffix => &["straße", "weg", "gasse", "allee", "platz"],
        Field::CompanySuffix => &["GmbH", "AG", "KG", "GmbH & Co. KG"],
        Field::FreeEmailDomain => &["gmail.com", "yahoo.com", "web.de", "gmx.de"],
        Field::DomainSuffix => &["de", "com", "net", "org", "info"],
        _ => &[],
    }
}

fn spanish(field: Field) -> &'static [&'static str] {
    match field {
        Field::FirstName => &[
            "Alejandro", "Daniel", "Pablo", "Hugo", "Álvaro", "Lucía", "María", "Paula", "Sofía",
            "Carmen", "Martina",
        ],
        Field::LastName => &[
            "García", "Fernández", "González", "Rodríguez", "López", "Martínez", "Sánchez",
            "Pérez", "Gómez", "Martín",
        ],
        Field::City => &[
            "Madrid", "Barcelona", "Valencia", "Sevilla", "Zaragoza", "Málaga", "Murcia",
            "Bilbao", "Alicante",
        ],
        Field::Country => &["España", "México", "Argentina", "Colombia", "Chile", "Perú"],
        Field::StreetName => &["Mayor", "Real", "del Sol", "de la Paz", "Nueva", "del Carmen"],
        Field::StreetSuffix => &["Calle", "Avenida", "Plaza", "Paseo"],
        Field::CompanySuffix => &["S.L.", "S.A.", "e Hijos"],
        Field::DomainSuffix => &["es", "com", "net", "org"],
        _ => &[],
    }
}

fn french(field: Field) -> &'static [&'static str] {
    match field {
        Field::FirstName => &[
            "Gabriel", "Louis", "Raphaël", "Jules", "Adam", "Jade", "Louise", "Emma", "Alice",
            "Chloé", "Léa",
        ],
        Field::LastName => &[
            "Martin", "Bernard", "Dubois", "Thomas", "Robert", "Richard", "Petit", "Durand",
            "Leroy", "Moreau",
        ],
        Field::City => &[
            "Paris", "Marseille", "Lyon", "Toulouse", "Nice", "Nantes", "Strasbourg",
            "Montpellier", "Bordeaux", "Lille",
        ],
        Field::Country => &["France", "Belgique", "Suisse", "Canada", "Luxembourg"],
        Field::StreetName => &["de la Paix", "Victor Hugo", "de la République", "Pasteur"],
        Field::StreetSuffix => &["Rue", "Avenue", "Boulevard", "Place", "Impasse"],
        Field::CompanySuffix => &["SA", "SARL", "SAS", "EURL"],
        Field::FreeEmailDomain => &["gmail.com", "yahoo.fr", "hotmail.fr", "orange.fr"],
        Field::DomainSuffix => &["fr", "com", "net", "org", "eu"],
        _ => &[],
    }
}

fn italian(field: Field) -> &'static [&'static str] {
    match field {
        Field::FirstName => &[
            "Leonardo", "Francesco", "Alessandro", "Lorenzo", "Mattia", "Sofia", "Giulia",
            "Aurora", "Alice", "Ginevra",
        ],
        Field::LastName => &[
            "Rossi", "Russo", "Ferrari", "Esposito", "Bianchi", "Romano", "Colombo", "Ricci",
            "Marino", "Greco",
        ],
        Field::City => &[
            "Roma", "Milano", "Napoli", "Torino", "Palermo", "Genova", "Bologna", "Firenze",
        ],
        Field::Country => &["Italia", "San Marino", "Svizzera", "Francia", "Austria"],
        Field::StreetName => &["Roma", "Garibaldi", "Mazzini", "Dante", "Verdi", "Cavour"],
        Field::StreetSuffix => &["Via", "Piazza", "Corso", "Viale"],
        Field::CompanySuffix => &["SPA", "s.r.l.", "e figli"],
        Field::DomainSuffix => &["it", "com", "net", "org"],
        _ => &[],
    }
}

fn japanese(field: Field) -> &'static [&'static str] {
    match field {
        Field::FirstName => &["翔太", "蓮", "大翔", "陽菜", "結衣", "さくら", "美咲", "健太"],
        Field::LastName => &["佐藤", "鈴木", "高橋", "田中", "伊藤", "渡辺", "山本", "中村"],
        Field::City => &["東京", "大阪", "横浜", "名古屋", "札幌", "福岡", "神戸", "京都"],
        Field::State => &["北海道", "東京都", "大阪府", "京都府", "神奈川県", "愛知県"],
        Field::Country => &["日本", "アメリカ", "中国", "韓国", "フランス"],
        Field::StreetName => &["中央", "本町", "栄町", "旭町", "緑町"],
        Field::DomainSuffix => &["jp", "com", "net", "org"],
        _ => &[],
    }
}

fn brazilian(field: Field) -> &'static [&'static str] {
    match field {
        Field::FirstName => &[
            "Miguel", "Arthur", "Heitor", "Bernardo", "Davi", "Helena", "Alice", "Laura",
            "Manuela", "Valentina",
        ],
        Field::LastName => &[
            "Silva", "Santos", "Oliveira", "Souza", "Rodrigues", "Ferreira", "Alves", "Pereira",
            "Lima", "Gomes",
        ],
        Field::City => &[
            "São Paulo", "Rio de Janeiro", "Brasília", "Salvador", "Fortaleza", "Belo Horizonte",
            "Manaus", "Curitiba", "Recife",
        ],
        Field::State => &["SP", "RJ", "MG", "BA", "RS", "PR", "PE", "CE", "AM", "DF"],
        Field::Country => &["Brasil", "Portugal", "Argentina", "Uruguai", "Paraguai"],
        Field::StreetName => &["das Flores", "São João", "Sete de Setembro", "da Paz"],
        Field::StreetSuffix => &["Rua", "Avenida", "Travessa", "Alameda"],
        Field::CompanySuffix => &["S.A.", "LTDA", "e Associados", "Comércio"],
        Field::FreeEmailDomain => &["gmail.com", "yahoo.com", "hotmail.com", "live.com", "bol.com.br"],
        Field::DomainSuffix => &["br", "com", "net", "org"],
        _ => &[],
    }
}

fn chinese(field: Field) -> &'static [&'static str] {
    match field {
        Field::FirstName => &["伟", "芳", "娜", "秀英", "敏", "静", "丽", "强", "磊", "军"],
        Field::LastName => &["王", "李", "张", "刘", "陈", "杨", "黄", "赵", "吴", "周"],
        Field::City => &["北京", "上海", "广州", "深圳", "成都", "杭州", "武汉", "西安"],
        Field::State => &["北京市", "上海市", "广东省", "四川省", "浙江省", "湖北省"],
        Field::Country => &["中国", "日本", "美国", "英国", "法国"],
        Field::StreetName => &["人民", "解放", "中山", "建设", "和平"],
        Field::StreetSuffix => &["路", "街", "巷"],
        Field::DomainSuffix => &["cn", "com", "net", "org"],
        _ => &[],
    }
}

fn base(field: Field) -> &'static [&'static str] {
    match field {
        Field::LoremWord => &[
            "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed",
            "do", "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna",
            "aliqua", "enim", "ad", "minim", "veniam", "quis", "nostrud", "exercitation",
            "ullamco", "laboris", "nisi", "aliquip", "ex", "ea", "commodo", "consequat", "duis",
            "aute", "irure", "in", "reprehenderit", "voluptate", "velit", "esse", "cillum",
            "fugiat", "nulla", "pariatur",
        ],
        Field::UserAgent => &[
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_2) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.2 Safari/605.1.15",
            "Mozilla/5.0 (X11; Linux x86_64; rv:121.0) Gecko/20100101 Firefox/121.0",
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_2 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.2 Mobile/15E148 Safari/604.1",
            "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Mobile Safari/537.36",
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36 Edg/120.0.0.0",
        ],
        Field::TransactionType => &["deposit", "withdrawal", "payment", "invoice"],
        Field::ProductDescription => &[
            "The slim & simple design keeps everyday essentials within reach",
            "Carbonite web goalkeeper gloves are ergonomically designed to give easy fit",
            "Ergonomic executive chair upholstered in bonded black leather and PVC",
            "New range of formal shirts designed keeping you in mind",
            "The automobile layout consists of a front-engine design with rear-wheel drive",
            "Boston's most advanced compression wear technology increases muscle oxygenation",
            "The beautiful range of apple naturalé that has an exciting mix of natural ingredients",
            "Andy shoes are designed to keep in mind durability as well as trends",
        ],
        Field::FreeEmailDomain => &["example.com", "example.net", "example.org"],
        Field::DomainSuffix => &["com"],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_chain_skips_duplicate_layer() {
        assert_eq!(
            layers(Locale::En),
            vec![Layer::Locale(Locale::En), Layer::Base]
        );
        assert_eq!(
            layers(Locale::De),
            vec![Layer::Locale(Locale::De), Layer::Locale(Locale::En), Layer::Base]
        );
    }

    #[test]
    fn test_locale_values_win_over_english() {
        let names = lookup(&layers(Locale::De), Field::LastName);
        assert!(names.contains(&"Müller"));
    }

    #[test]
    fn test_missing_locale_field_falls_back_to_english() {
        let departments = lookup(&layers(Locale::Ja), Field::Department);
        assert!(departments.contains(&"Books"));
    }

    #[test]
    fn test_base_layer_backs_every_locale() {
        for locale in Locale::ALL {
            assert!(!lookup(&layers(locale), Field::LoremWord).is_empty());
            assert!(!lookup(&layers(locale), Field::UserAgent).is_empty());
        }
    }

    #[test]
    fn test_every_field_resolves_for_every_locale() {
        let fields = [
            Field::FirstName,
            Field::LastName,
            Field::City,
            Field::State,
            Field::Country,
            Field::StreetName,
            Field::StreetSuffix,
            Field::CompanySuffix,
            Field::CatchPhraseAdjective,
            Field::CatchPhraseDescriptor,
            Field::CatchPhraseNoun,
            Field::Department,
            Field::ProductAdjective,
            Field::ProductMaterial,
            Field::ProductNoun,
            Field::ProductDescription,
            Field::FreeEmailDomain,
            Field::DomainSuffix,
            Field::LoremWord,
            Field::UserAgent,
            Field::TransactionType,
        ];

        for locale in Locale::ALL {
            for field in fields {
                assert!(
                    !lookup(&layers(locale), field).is_empty(),
                    "{:?} missing for {}",
                    field,
                    locale
                );
            }
        }
    }
}
