//! Synthetic record generation for seeding the stores

use rand::RngExt;

use clearance_types::record::{ServiceRecord, UserRecord};

use crate::prelude::*;

const FIRST_NAMES: [&str; 26] = [
	"James", "Mary", "John", "Patricia", "Robert", "Jennifer", "Michael", "Linda", "William",
	"Elizabeth", "David", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas", "Sarah",
	"Charles", "Karen", "Christopher", "Nancy", "Daniel", "Lisa", "Matthew", "Betty",
];
const LAST_NAMES: [&str; 26] = [
	"Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
	"Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
	"Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez",
];
const DOMAINS: [&str; 5] = ["example.com", "test.com", "demo.com", "mail.com", "sample.net"];
const STREETS: [&str; 12] = [
	"Main St", "High St", "Maple Ave", "Oak Rd", "Pine Ln", "Cedar Blvd", "Elm St", "Walnut Dr",
	"Birch Ct", "Ash St", "Cherry Ave", "Hickory St",
];
const CITIES: [&str; 12] = [
	"Springfield", "Riverside", "Greenville", "Fairview", "Madison", "Georgetown", "Arlington",
	"Ashland", "Burlington", "Clinton", "Dayton", "Franklin",
];
const STATES: [&str; 12] = ["NY", "CA", "TX", "FL", "IL", "PA", "OH", "GA", "NC", "MI", "NJ", "VA"];
const SERVICES: [&str; 5] = ["Server", "Telephone", "Computer", "Printer", "Router"];

fn pick<'a>(rng: &mut impl RngExt, items: &[&'a str]) -> &'a str {
	items[rng.random_range(0..items.len())]
}

fn random_level(rng: &mut impl RngExt) -> AccessLevel {
	AccessLevel::ALL[rng.random_range(0..AccessLevel::ALL.len())]
}

fn random_address(rng: &mut impl RngExt) -> String {
	format!(
		"{} {}, {}, {} {}",
		rng.random_range(100..10000),
		pick(rng, &STREETS),
		pick(rng, &CITIES),
		pick(rng, &STATES),
		rng.random_range(10000..100000)
	)
}

fn random_ipv4(rng: &mut impl RngExt) -> String {
	format!(
		"{}.{}.{}.{}",
		rng.random_range(1..255),
		rng.random_range(0..255),
		rng.random_range(0..255),
		rng.random_range(1..255)
	)
}

pub fn generate_user() -> UserRecord {
	let mut rng = rand::rng();
	let full_name = format!("{} {}", pick(&mut rng, &FIRST_NAMES), pick(&mut rng, &LAST_NAMES));
	let email = format!("{}@{}", rng.random_range(1000..10000), pick(&mut rng, &DOMAINS));
	let phone = format!(
		"({}) {}-{}",
		rng.random_range(200..1000),
		rng.random_range(200..1000),
		rng.random_range(1000..10000)
	);
	let address = random_address(&mut rng);
	UserRecord::new(phone, email, full_name, address, random_level(&mut rng))
}

pub fn generate_service() -> ServiceRecord {
	let mut rng = rand::rng();
	let service = pick(&mut rng, &SERVICES);
	let address = random_address(&mut rng);
	let ip_address = random_ipv4(&mut rng);
	let ip_gateway = random_ipv4(&mut rng);
	ServiceRecord::new(service, address, ip_address, ip_gateway, random_level(&mut rng))
}

pub fn generate_users(count: usize) -> Vec<UserRecord> {
	(0..count).map(|_| generate_user()).collect()
}

pub fn generate_services(count: usize) -> Vec<ServiceRecord> {
	(0..count).map(|_| generate_service()).collect()
}


// vim: ts=4
