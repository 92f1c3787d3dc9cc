// Backend falso para tests: registra cada llamada y simula /business y /sales

use std::cell::RefCell;

use async_trait::async_trait;

use super::api_client::{AdminApi, ApiError};
use crate::models::{
    Business, BusinessPayload, LoginRequest, LoginResponse, Sale, SalePayload, SignupRequest,
};

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Login(LoginRequest),
    Signup(SignupRequest),
    ListBusinesses,
    CreateBusiness(BusinessPayload),
    UpdateBusiness(i64, BusinessPayload),
    ListSales,
    CreateSale(SalePayload),
}

#[derive(Debug)]
pub struct MockApi {
    pub calls: RefCell<Vec<Call>>,
    pub businesses: RefCell<Vec<Business>>,
    pub sales: RefCell<Vec<Sale>>,
    pub list_error: RefCell<Option<ApiError>>,
    pub write_error: RefCell<Option<ApiError>>,
    pub login_result: RefCell<Result<LoginResponse, ApiError>>,
    pub signup_result: RefCell<Result<(), ApiError>>,
}

impl Default for MockApi {
    fn default() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            businesses: RefCell::new(Vec::new()),
            sales: RefCell::new(Vec::new()),
            list_error: RefCell::new(None),
            write_error: RefCell::new(None),
            login_result: RefCell::new(Ok(LoginResponse {
                token: Some("server-token".to_string()),
                ..LoginResponse::default()
            })),
            signup_result: RefCell::new(Ok(())),
        }
    }
}

pub fn business(id: i64, name: &str, city: &str) -> Business {
    Business {
        business_id: id,
        business_name: name.to_string(),
        business_email: format!("{}@example.com", name.to_lowercase().replace(' ', "")),
        contact_number: format!("98765432{:02}", id % 100),
        city: city.to_string(),
        created_time: Some("2024-01-01T00:00:00Z".to_string()),
        last_modified_time: None,
    }
}

pub fn sale(id: i64, invoice: &str, business_id: i64, amount: f64) -> Sale {
    Sale {
        sales_id: id,
        invoice_number: invoice.to_string(),
        business_id,
        amount,
        created_time: None,
        last_modified_time: None,
    }
}

impl MockApi {
    pub fn with_businesses(businesses: Vec<Business>) -> Self {
        let api = Self::default();
        *api.businesses.borrow_mut() = businesses;
        api
    }

    pub fn with_sales(sales: Vec<Sale>) -> Self {
        let api = Self::default();
        *api.sales.borrow_mut() = sales;
        api
    }

    pub fn count(&self, predicate: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|call| predicate(call)).count()
    }

    pub fn total_calls(&self) -> usize {
        self.calls.borrow().len()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn list_outcome(&self) -> Result<(), ApiError> {
        match self.list_error.borrow().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn write_outcome(&self) -> Result<(), ApiError> {
        match self.write_error.borrow().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl AdminApi for MockApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.record(Call::Login(request.clone()));
        self.login_result.borrow().clone()
    }

    async fn signup(&self, request: &SignupRequest) -> Result<(), ApiError> {
        self.record(Call::Signup(request.clone()));
        self.signup_result.borrow().clone()
    }

    async fn list_businesses(&self) -> Result<Vec<Business>, ApiError> {
        self.record(Call::ListBusinesses);
        self.list_outcome()?;
        Ok(self.businesses.borrow().clone())
    }

    async fn create_business(&self, payload: &BusinessPayload) -> Result<(), ApiError> {
        self.record(Call::CreateBusiness(payload.clone()));
        self.write_outcome()?;
        let next_id = self
            .businesses
            .borrow()
            .iter()
            .map(|b| b.business_id)
            .max()
            .unwrap_or(0)
            + 1;
        self.businesses.borrow_mut().push(Business {
            business_id: next_id,
            business_name: payload.business_name.clone(),
            business_email: payload.business_email.clone(),
            contact_number: payload.contact_number.clone(),
            city: payload.city.clone(),
            created_time: None,
            last_modified_time: None,
        });
        Ok(())
    }

    async fn update_business(&self, id: i64, payload: &BusinessPayload) -> Result<(), ApiError> {
        self.record(Call::UpdateBusiness(id, payload.clone()));
        self.write_outcome()?;
        let mut businesses = self.businesses.borrow_mut();
        let target = businesses
            .iter_mut()
            .find(|b| b.business_id == id)
            .ok_or(ApiError::Http {
                status: 404,
                message: Some("Business not found".to_string()),
            })?;
        target.business_name = payload.business_name.clone();
        target.business_email = payload.business_email.clone();
        target.contact_number = payload.contact_number.clone();
        target.city = payload.city.clone();
        Ok(())
    }

    async fn list_sales(&self) -> Result<Vec<Sale>, ApiError> {
        self.record(Call::ListSales);
        self.list_outcome()?;
        Ok(self.sales.borrow().clone())
    }

    async fn create_sale(&self, payload: &SalePayload) -> Result<(), ApiError> {
        self.record(Call::CreateSale(payload.clone()));
        self.write_outcome()?;
        let next_id = self.sales.borrow().len() as i64 + 1;
        self.sales.borrow_mut().push(sale(
            next_id,
            &payload.invoice_number,
            payload.business_id,
            payload.amount,
        ));
        Ok(())
    }
}
